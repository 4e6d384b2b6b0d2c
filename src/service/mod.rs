pub mod questions;
pub mod responses;
pub mod share_card;

pub use questions::QuestionService;
pub use responses::ResponseService;
