// API handlers - thin HTTP orchestration layer
// Handlers only deal with HTTP concerns:
// 1. Decode the request
// 2. Call domain logic and the store
// 3. Transform the result to an HTTP response

pub mod receipts;

pub use receipts::{get_points_handler, process_receipt_handler};
