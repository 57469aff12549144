//! HTML rendering for the fruit views.
//!
//! All markup lives in this module so the route handlers stay a thin mapping
//! from store results to responses. Pages are assembled with `format!` into a
//! shared layout; user-sourced text goes through [`escape`] first. A view
//! asked to render a record that does not exist gets a placeholder body
//! instead of an error.

use crate::model::Fruit;
use axum::response::Html;

/// Minimal HTML escaping for text interpolated into the pages.
fn escape(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn layout(title: &str, body: &str) -> Html<String> {
    Html(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <title>{title}</title>
    <link rel="stylesheet" href="/styles.css">
</head>
<body>
    <h1>{title}</h1>
{body}
</body>
</html>
"#
    ))
}

fn display_name(fruit: &Fruit) -> String {
    escape(fruit.name.as_deref().unwrap_or("(unnamed)"))
}

fn display_color(fruit: &Fruit) -> String {
    escape(fruit.color.as_deref().unwrap_or("unknown"))
}

/// Index page: every fruit as a link to its detail page.
pub fn fruits_index(fruits: &[Fruit]) -> Html<String> {
    let mut items = String::new();
    for fruit in fruits {
        items.push_str(&format!(
            "        <li><a href=\"/fruits/{id}\">{name}</a></li>\n",
            id = escape(&fruit.id),
            name = display_name(fruit),
        ));
    }

    let body = format!(
        r#"    <nav><a href="/fruits/new">Add a fruit</a></nav>
    <ul>
{items}    </ul>
"#
    );
    layout("Fruits", &body)
}

/// Detail page for one fruit, with edit link and delete form.
pub fn fruits_show(fruit: Option<&Fruit>) -> Html<String> {
    let Some(fruit) = fruit else {
        return layout("Fruit", "    <p>No such fruit.</p>\n");
    };

    let ready = if fruit.ready_to_eat {
        "It is ready to eat!"
    } else {
        "It is not ready to eat. Do not eat it!"
    };
    let body = format!(
        r#"    <p>{name} is {color}.</p>
    <p>{ready}</p>
    <nav><a href="/fruits/{id}/edit">Edit</a></nav>
    <form action="/fruits/{id}" method="POST">
        <input type="hidden" name="_method" value="DELETE">
        <input type="submit" value="Delete">
    </form>
    <nav><a href="/fruits">Back to fruits</a></nav>
"#,
        name = display_name(fruit),
        color = display_color(fruit),
        id = escape(&fruit.id),
    );
    layout("Show Fruit", &body)
}

/// Create-form page.
pub fn fruits_new() -> Html<String> {
    let body = r#"    <form action="/fruits" method="POST">
        <label>Name <input type="text" name="name"></label>
        <label>Color <input type="text" name="color"></label>
        <label>Ready to eat <input type="checkbox" name="readyToEat"></label>
        <input type="submit" value="Create Fruit">
    </form>
    <nav><a href="/fruits">Back to fruits</a></nav>
"#;
    layout("New Fruit", body)
}

/// Edit-form page, prefilled with the record's current values and tunneling
/// PUT through POST via the `_method` field.
pub fn fruits_edit(fruit: Option<&Fruit>) -> Html<String> {
    let Some(fruit) = fruit else {
        return layout("Edit Fruit", "    <p>No such fruit.</p>\n");
    };

    let checked = if fruit.ready_to_eat { " checked" } else { "" };
    let body = format!(
        r#"    <form action="/fruits/{id}" method="POST">
        <input type="hidden" name="_method" value="PUT">
        <label>Name <input type="text" name="name" value="{name}"></label>
        <label>Color <input type="text" name="color" value="{color}"></label>
        <label>Ready to eat <input type="checkbox" name="readyToEat"{checked}></label>
        <input type="submit" value="Update Fruit">
    </form>
    <nav><a href="/fruits">Back to fruits</a></nav>
"#,
        id = escape(&fruit.id),
        name = escape(fruit.name.as_deref().unwrap_or("")),
        color = escape(fruit.color.as_deref().unwrap_or("")),
    );
    layout("Edit Fruit", &body)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grape() -> Fruit {
        Fruit {
            id: "abc123".into(),
            name: Some("Grape".into()),
            color: Some("purple".into()),
            ready_to_eat: true,
        }
    }

    #[test]
    fn index_links_each_fruit() {
        let Html(page) = fruits_index(&[grape()]);
        assert!(page.contains("/fruits/abc123"));
        assert!(page.contains("Grape"));
        assert!(page.contains("/fruits/new"));
    }

    #[test]
    fn show_renders_fields_and_delete_override() {
        let Html(page) = fruits_show(Some(&grape()));
        assert!(page.contains("Grape is purple."));
        assert!(page.contains("ready to eat!"));
        assert!(page.contains(r#"name="_method" value="DELETE""#));
    }

    #[test]
    fn show_handles_absent_record() {
        let Html(page) = fruits_show(None);
        assert!(page.contains("No such fruit."));
    }

    #[test]
    fn edit_prefills_and_tunnels_put() {
        let Html(page) = fruits_edit(Some(&grape()));
        assert!(page.contains(r#"value="Grape""#));
        assert!(page.contains(r#"name="_method" value="PUT""#));
        assert!(page.contains("checked"));
    }

    #[test]
    fn user_text_is_escaped() {
        let mut fruit = grape();
        fruit.name = Some("<script>alert(1)</script>".into());
        let Html(page) = fruits_show(Some(&fruit));
        assert!(!page.contains("<script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
