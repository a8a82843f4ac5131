pub use super::aircraft::Entity as Aircraft;
pub use super::airline::Entity as Airline;
pub use super::airport::Entity as Airport;
pub use super::disposable_assignment::Entity as DisposableAssignment;
pub use super::disposable_scenery::Entity as DisposableScenery;
pub use super::disposable_whazzup::Entity as DisposableWhazzup;
pub use super::flight::Entity as Flight;
pub use super::news::Entity as News;
pub use super::pirep::Entity as Pirep;
pub use super::pirep_comment::Entity as PirepComment;
pub use super::rank_subfleet::Entity as RankSubfleet;
pub use super::role_user::Entity as RoleUser;
pub use super::setting::Entity as Setting;
pub use super::subfleet::Entity as Subfleet;
pub use super::typerating_subfleet::Entity as TyperatingSubfleet;
pub use super::typerating_user::Entity as TyperatingUser;
pub use super::user::Entity as User;
pub use super::user_field::Entity as UserField;
pub use super::user_field_value::Entity as UserFieldValue;
