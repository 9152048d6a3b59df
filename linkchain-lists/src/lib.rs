pub mod singly;
