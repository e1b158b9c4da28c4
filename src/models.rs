pub mod feed_page;
pub mod lenient;
pub mod post;

pub use feed_page::{BlogInfo, FeedPage};
pub use post::{Post, PostType};
