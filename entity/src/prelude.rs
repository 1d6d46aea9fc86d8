pub use super::account_item::Entity as AccountItem;
pub use super::account_progress::Entity as AccountProgress;
pub use super::attendance::Entity as Attendance;
pub use super::clear_record::Entity as ClearRecord;
pub use super::mail::Entity as Mail;
pub use super::mail_item::Entity as MailItem;
pub use super::purchase_receipt::Entity as PurchaseReceipt;
