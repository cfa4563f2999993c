// File: src/components/shell.rs
// Purpose: Root document: head, navbar, main content

use maud::{html, Markup, DOCTYPE};

use super::navbar;

/// Full HTML page with the navbar on top and `content` as the main area
pub fn shell(app_name: &str, active_path: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="utf-8";
                meta name="viewport" content="width=device-width, initial-scale=1";
                title { (app_name) }
            }
            body {
                (navbar(app_name, active_path))
                main id="app-root" {
                    (content)
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shell_wraps_content() {
        let page = shell("Food Delivery", "/", html! { p { "inner" } }).into_string();

        assert!(page.starts_with("<!DOCTYPE html>"));
        assert!(page.contains("<title>Food Delivery</title>"));
        assert!(page.contains("<nav"));
        assert!(page.contains("<p>inner</p>"));
    }
}
