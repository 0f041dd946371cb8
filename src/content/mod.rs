//! Content module - posts, the post store, queries and rendering

mod frontmatter;
mod highlight;
pub mod loader;
mod post;
pub mod query;
mod render;
pub mod store;

pub use frontmatter::FrontMatter;
pub use highlight::HtmlRenderer;
pub use post::{Post, PostId};
pub use render::{render_content, RenderError, Segment, FENCE};
pub use store::{PostStore, StoreError};
