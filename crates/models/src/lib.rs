pub mod db;
pub mod project_manage;

#[cfg(test)]
mod tests;
