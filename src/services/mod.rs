//! 各管理界面的业务逻辑
//!
//! 每个界面持有一个 `ViewModel`，只通过 `RecordStore` 与远端服务交互，失败时
//! 通过 `Notifier` 告知用户。

pub mod classes;
pub mod confirm;
pub mod courses;
pub mod enrollments;
pub mod grades;
pub mod labels;
pub mod notifier;
pub mod students;
pub mod system;
pub mod teachers;
pub mod view_model;

pub use classes::ClassScreen;
pub use confirm::{Confirm, FixedAnswer, StdinConfirm};
pub use courses::CourseScreen;
pub use enrollments::EnrollmentScreen;
pub use grades::GradeScreen;
pub use notifier::{ConsoleNotifier, Notifier, RecordingNotifier};
pub use students::StudentScreen;
pub use teachers::TeacherScreen;
pub use view_model::ViewModel;
