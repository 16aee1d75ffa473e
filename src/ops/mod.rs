mod rewrite;
mod transform;

pub use rewrite::{Preview, Rewriter, update_row_values};
pub use transform::Replacement;
