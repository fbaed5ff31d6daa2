//! Inline HTML views.
//!
//! Pages are plain formatted strings wrapped in a shared shell; no
//! template engine.

use crate::entity::{item, size};

fn page(title: &str, body: &str) -> String {
    format!(
        r#"<!doctype html>
<html>
    <head><title>{title} — Scarlet Shop</title></head>
    <body>
        <nav>
            <a href="/">Home</a> |
            <a href="/catalog">Catalog</a> |
            <a href="/cart">Cart</a> |
            <a href="/favourite">Favourites</a> |
            <a href="/about">About</a>
        </nav>
        <h1>{title}</h1>
{body}
    </body>
</html>"#
    )
}

fn size_labels(sizes: &[size::Model]) -> String {
    sizes
        .iter()
        .map(|s| s.value.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn item_card(item: &item::Model, sizes: &[size::Model]) -> String {
    format!(
        r#"        <div class="item">
            <a href="/item/{id}"><img src="{image}" alt="{title}" width="160"></a>
            <p><a href="/item/{id}">{title}</a> — {price}</p>
            <p>Sizes: {sizes}</p>
            <form action="/add_to_cart/{id}" method="post"><button type="submit">Add to cart</button></form>
            <form action="/toggle_favourite/{id}" method="post"><button type="submit">&#9825; Favourite</button></form>
        </div>"#,
        id = item.id,
        image = item.image,
        title = item.title,
        price = item.price,
        sizes = size_labels(sizes),
    )
}

pub fn index_page() -> String {
    page(
        "Welcome",
        r#"        <p>A small shoe shop. Browse the <a href="/catalog">catalog</a>, mark
        favourites, and fill your cart.</p>"#,
    )
}

pub fn about_page() -> String {
    page(
        "About",
        r#"        <p>Scarlet Shop is a demo storefront: a catalog of shoes with
        per-visitor cart and favourites kept in session state.</p>"#,
    )
}

pub fn catalog_page(items: &[(item::Model, Vec<size::Model>)]) -> String {
    let cards = if items.is_empty() {
        "        <p>The catalog is empty.</p>".to_string()
    } else {
        items
            .iter()
            .map(|(item, sizes)| item_card(item, sizes))
            .collect::<Vec<_>>()
            .join("\n")
    };
    page("Catalog", &cards)
}

pub fn item_page(item: &item::Model, sizes: &[size::Model]) -> String {
    let body = format!(
        r#"        <img src="{image}" alt="{title}" width="320">
        <p>Price: {price}</p>
        <p>Sizes: {size_list}</p>
        <p>{text}</p>
        <form action="/add_to_cart/{id}" method="post"><button type="submit">Add to cart</button></form>
        <form action="/toggle_favourite/{id}" method="post"><button type="submit">&#9825; Favourite</button></form>"#,
        id = item.id,
        image = item.image,
        title = item.title,
        price = item.price,
        size_list = size_labels(sizes),
        text = item.text,
    );
    page(&item.title, &body)
}

pub fn add_to_catalog_page(
    sizes: &[size::Model],
    items: &[(item::Model, Vec<size::Model>)],
) -> String {
    let checkboxes = sizes
        .iter()
        .map(|s| {
            format!(
                r#"            <label><input type="checkbox" name="sizes" value="{}"> {}</label>"#,
                s.id, s.value
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let existing = items
        .iter()
        .map(|(item, _)| {
            format!(
                r#"            <li>{title} (id {id})
                <form action="/delete_item" method="post" style="display:inline">
                    <input type="hidden" name="item_id" value="{id}">
                    <button type="submit">Delete</button>
                </form>
            </li>"#,
                id = item.id,
                title = item.title,
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    let body = format!(
        r#"        <form action="/addtocatalog" method="post">
            <label>Title: <input type="text" name="title" required></label><br>
            <label>Image URL: <input type="text" name="image" required></label><br>
            <label>Price: <input type="text" name="price" required></label><br>
            <label>Description: <textarea name="text" required></textarea></label><br>
{checkboxes}
            <br><button type="submit">Add to catalog</button>
        </form>
        <h2>Current items</h2>
        <ul>
{existing}
        </ul>"#
    );
    page("Add to catalog", &body)
}

pub fn cart_page(entries: &[(item::Model, usize)]) -> String {
    let rows = if entries.is_empty() {
        "        <p>Your cart is empty.</p>".to_string()
    } else {
        entries
            .iter()
            .map(|(item, quantity)| {
                format!(
                    r#"        <div class="cart-entry">
            <p><a href="/item/{id}">{title}</a> — {price} &times; {quantity}</p>
            <form action="/remove_from_cart/{id}" method="post"><button type="submit">Remove one</button></form>
        </div>"#,
                    id = item.id,
                    title = item.title,
                    price = item.price,
                    quantity = quantity,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    page("Cart", &rows)
}

pub fn favourites_page(items: &[item::Model]) -> String {
    let rows = if items.is_empty() {
        "        <p>No favourites yet.</p>".to_string()
    } else {
        items
            .iter()
            .map(|item| {
                format!(
                    r#"        <div class="favourite">
            <p><a href="/item/{id}">{title}</a> — {price}</p>
            <form action="/toggle_favourite/{id}" method="post"><button type="submit">Remove</button></form>
        </div>"#,
                    id = item.id,
                    title = item.title,
                    price = item.price,
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    };
    page("Favourites", &rows)
}
