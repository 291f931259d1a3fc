use web_sys as web;

/// Append the gesture hint element to the page body.
pub fn inject_hint(document: &web::Document) {
    let Ok(el) = document.create_element("div") else {
        return;
    };
    el.set_class_name("hint");
    el.set_text_content(Some("縦スクロールでパネル操作（マウス/タッチ対応）"));
    if let Some(body) = document.body() {
        _ = body.append_child(&el);
    }
}
