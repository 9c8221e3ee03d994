use crate::web_document::web_document;
use crate::web_error_handling::JsResult;


pub trait WebElementExt {
    fn with_id(self, value: &str) -> web_sys::Element;
    fn with_maybe_text_content(self, text: Option<&str>) -> web_sys::Element;
    fn with_text_content(self, text: &str) -> web_sys::Element;
    fn with_classes<'a>(
        self, classes: impl IntoIterator<Item = &'a str>,
    ) -> JsResult<web_sys::Element>;

    fn remove_all_children(&self);

    fn append_new_element(&self, local_name: &str) -> JsResult<web_sys::Element>;
    fn append_animated_dots(&self) -> JsResult<()>;
}

impl WebElementExt for web_sys::Element {
    fn with_id(self, value: &str) -> web_sys::Element {
        self.set_id(value);
        self
    }

    fn with_maybe_text_content(self, text: Option<&str>) -> web_sys::Element {
        self.set_text_content(text);
        self
    }

    fn with_text_content(self, text: &str) -> web_sys::Element {
        self.with_maybe_text_content(Some(text))
    }

    fn with_classes<'a>(
        self, classes: impl IntoIterator<Item = &'a str>,
    ) -> JsResult<web_sys::Element> {
        for class in classes {
            self.class_list().add_1(class)?;
        }
        Ok(self)
    }

    fn remove_all_children(&self) { self.replace_children_with_node_0() }

    // Improvement potential. Check if fetching `web_document()` every time slows down functions
    // that create a lot of elements (here and elsewhere).
    fn append_new_element(&self, local_name: &str) -> JsResult<web_sys::Element> {
        let node = web_document().create_element(local_name)?;
        self.append_child(&node)?;
        Ok(node)
    }

    fn append_animated_dots(&self) -> JsResult<()> {
        for _ in 0..3 {
            self.append_new_element("span")?.with_classes(["dot"])?.with_text_content(".");
        }
        Ok(())
    }
}
