mod bulk;
mod drop;
mod reuse;
