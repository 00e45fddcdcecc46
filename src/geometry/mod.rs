pub mod consts;
pub mod sampling;
#[cfg(test)]
mod tests;
