use maud::{html, Markup};

const LINKS: &[(&str, &str)] = &[("/", "Search"), ("/restaurants", "Restaurants")];

/// Top navigation. The link matching `active_path` is marked current.
pub fn navbar(app_name: &str, active_path: &str) -> Markup {
    html! {
        nav class="navbar" {
            a class="navbar-brand" href="/" { (app_name) }
            ul class="navbar-links" {
                @for (href, label) in LINKS {
                    li {
                        @if *href == active_path {
                            a class="active" href=(href) aria-current="page" { (label) }
                        } @else {
                            a href=(href) { (label) }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_link_is_marked() {
        let nav = navbar("Food Delivery", "/restaurants").into_string();
        assert!(nav.contains(r#"<a class="active" href="/restaurants" aria-current="page">Restaurants</a>"#));
        assert!(nav.contains(r#"<a href="/">Search</a>"#));
    }
}
