#[cfg(test)]
mod engine_test;
