//! Sea-ORM entity definitions for the shop.
//!
//! Three catalog tables (`item`, `size`, and the `item_size` join between
//! them) plus the `session` table used by the session store. The catalog
//! entities are wired for many-to-many traversal so items can load their
//! sizes with `find_with_related`.

pub mod item;
pub mod item_size;
pub mod session;
pub mod size;
