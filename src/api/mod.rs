pub mod tanka;
