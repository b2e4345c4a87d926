//! HTML fragment renderers.
//!
//! Every renderer takes the indentation inferred from its start marker and
//! prefixes each emitted line with it, so spliced blocks line up with the
//! surrounding markup.

pub mod cards;
pub mod item_list;
pub mod related;
pub mod tags;

pub use cards::render_cards;
pub use item_list::render_item_list;
pub use related::render_related;
pub use tags::render_tag_filter;
