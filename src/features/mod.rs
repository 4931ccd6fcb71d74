pub mod resolver;
pub mod rewrite;
