use maud::html;

pub fn document(title: &str, content: maud::Markup, head: Option<maud::Markup>) -> maud::Markup {
    html! {
        (maud::DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                title { (title) }
                meta name="viewport" content="width=device-width, initial-scale=1";
                @if let Some(head) = head { (head) }
            }
            body {
                main { (content) }
                footer { div { a href="/" { "Home" } " - " a href="/items" { "Items" } } }
            }
        }
    }
}
