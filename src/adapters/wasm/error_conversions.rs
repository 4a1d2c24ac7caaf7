use wasm_bindgen::JsValue;

use crate::domain::browse::BrowseError;

// A rejected backend promise surfaces as the raw rejection value: a string
// for plain `throw 'msg'`, an Error object otherwise.
impl From<JsValue> for BrowseError {
    fn from(rejection: JsValue) -> Self {
        let detail = rejection
            .as_string()
            .unwrap_or_else(|| format!("{:?}", rejection));
        BrowseError::backend_error(detail)
    }
}

impl From<BrowseError> for JsValue {
    fn from(error: BrowseError) -> Self {
        JsValue::from_str(&error.to_string())
    }
}
