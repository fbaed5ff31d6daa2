//! HTTP routes and handlers.
//!
//! Handlers translate requests into catalog queries and session-state
//! mutations, then render a view or redirect. All mutating routes are POST
//! and answer with `303 See Other`.

use axum::{
    extract::{Path, State},
    response::{Html, Redirect},
    routing::{get, post},
    Form, Router,
};
use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::catalog::{self, NewItem};
use crate::entity::item;
use crate::error::AppError;
use crate::session_state::{Cart, Favourites};
use crate::views;

/// Shared application context, constructed once at startup and handed to
/// every handler through axum's `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

/// Builds the full route table. The session layer is applied by the caller
/// so tests can wire their own store.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/about", get(about))
        .route("/catalog", get(catalog_view))
        .route("/addtocatalog", get(add_to_catalog_form).post(add_to_catalog))
        .route("/favourite", get(favourites_view))
        .route("/delete_item", post(delete_item))
        .route("/item/{item_id}", get(item_detail))
        .route("/add_to_cart/{item_id}", post(add_to_cart))
        .route("/cart", get(cart_view))
        .route("/remove_from_cart/{item_id}", post(remove_from_cart))
        .route("/toggle_favourite/{item_id}", post(toggle_favourite))
        .with_state(state)
}

async fn index() -> Html<String> {
    Html(views::index_page())
}

async fn about() -> Html<String> {
    Html(views::about_page())
}

async fn catalog_view(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let items = catalog::list_items(&state.db).await?;
    Ok(Html(views::catalog_page(&items)))
}

async fn add_to_catalog_form(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let sizes = catalog::list_sizes(&state.db).await?;
    let items = catalog::list_items(&state.db).await?;
    Ok(Html(views::add_to_catalog_page(&sizes, &items)))
}

/// POST half of the creation form. The raw pairs keep the repeated `sizes`
/// key intact; validation happens in [`NewItem::from_pairs`].
async fn add_to_catalog(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, AppError> {
    let new_item = NewItem::from_pairs(pairs)?;
    catalog::create_item(&state.db, new_item).await?;
    // GET-after-POST: back to the form, not to the new item
    Ok(Redirect::to("/addtocatalog"))
}

/// Deletes by the `item_id` form field. A missing, unparseable, or
/// unmatched id is a silent no-op; the response is the same redirect
/// either way.
async fn delete_item(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, AppError> {
    let item_id = pairs
        .iter()
        .find(|(key, _)| key == "item_id")
        .and_then(|(_, value)| value.parse::<i32>().ok());

    if let Some(item_id) = item_id {
        catalog::delete_item(&state.db, item_id).await?;
    }
    Ok(Redirect::to("/addtocatalog"))
}

async fn item_detail(
    State(state): State<AppState>,
    Path(item_id): Path<i32>,
) -> Result<Html<String>, AppError> {
    let (item, sizes) = catalog::find_item(&state.db, item_id).await?;
    Ok(Html(views::item_page(&item, &sizes)))
}

/// Appends to the cart without checking the catalog; a stale id is
/// tolerated and drops out of the cart view at resolution time.
async fn add_to_cart(session: Session, Path(item_id): Path<i32>) -> Result<Redirect, AppError> {
    let mut cart = Cart::load(&session).await?;
    cart.add(item_id);
    cart.save(&session).await?;
    Ok(Redirect::to("/cart"))
}

async fn cart_view(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let cart = Cart::load(&session).await?;
    let quantities = cart.quantities();

    let ids: Vec<i32> = quantities.iter().map(|&(id, _)| id).collect();
    let items = catalog::items_by_ids(&state.db, &ids).await?;

    // Stale ids resolve to nothing and disappear from the view; the
    // session list itself is left alone.
    let entries: Vec<(item::Model, usize)> = quantities
        .into_iter()
        .filter_map(|(id, quantity)| {
            items
                .iter()
                .find(|item| item.id == id)
                .map(|item| (item.clone(), quantity))
        })
        .collect();

    Ok(Html(views::cart_page(&entries)))
}

async fn remove_from_cart(
    session: Session,
    Path(item_id): Path<i32>,
) -> Result<Redirect, AppError> {
    let mut cart = Cart::load(&session).await?;
    if cart.remove_first(item_id) {
        cart.save(&session).await?;
    }
    Ok(Redirect::to("/cart"))
}

async fn toggle_favourite(
    session: Session,
    Path(item_id): Path<i32>,
) -> Result<Redirect, AppError> {
    let mut favourites = Favourites::load(&session).await?;
    favourites.toggle(item_id);
    favourites.save(&session).await?;
    Ok(Redirect::to("/favourite"))
}

async fn favourites_view(
    State(state): State<AppState>,
    session: Session,
) -> Result<Html<String>, AppError> {
    let favourites = Favourites::load(&session).await?;
    let items = catalog::items_by_ids(&state.db, favourites.ids()).await?;

    // Render in session-list order, dropping stale ids
    let ordered: Vec<item::Model> = favourites
        .ids()
        .iter()
        .filter_map(|id| items.iter().find(|item| item.id == *id).cloned())
        .collect();

    Ok(Html(views::favourites_page(&ordered)))
}
