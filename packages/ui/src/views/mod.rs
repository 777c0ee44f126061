mod customers;
pub use customers::CustomersScreen;
