pub mod calculate_projection;
pub mod suggest_etfs;

#[cfg(test)]
pub(crate) mod test_support;
