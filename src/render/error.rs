use maud::html;

use super::document::document;

pub fn render_error(code: u16, message: &str) -> rouille::Response {
    let title = format!("{}", code);

    let document = document(
        &title,
        html! {
            h1 { (&title) }
            p { (message) }
            p { a href="/" { "Go home" } }
        },
        None,
    );

    rouille::Response::html(document.into_string()).with_status_code(code)
}

pub fn not_found() -> rouille::Response {
    render_error(404, "Not Found")
}
