// scalargrad-core/src/utils/mod.rs

pub mod testing;
