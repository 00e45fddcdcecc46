pub mod handlers;
pub mod services;
#[cfg(test)]
mod tests;
