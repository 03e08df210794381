pub mod zebra;
