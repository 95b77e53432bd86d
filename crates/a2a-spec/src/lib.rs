pub mod errors;
pub mod params;
pub mod validation;

#[cfg(test)]
mod test_utils;
