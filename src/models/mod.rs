pub mod business;
pub mod employment;
pub mod envelope;
pub mod lead;
pub mod loan;
pub mod user;

pub use business::{Business, BusinessUpdate, NewBusiness};
pub use employment::{EmploymentDetails, EmploymentType, EmploymentUpdate};
pub use envelope::ApiEnvelope;
pub use lead::{Lead, LeadUpdate, NewLead};
pub use loan::{DashboardStats, HomePageData, LoanRecord, LoanStatus, StatusCategory, UnknownStatus};
pub use user::{
    ActivityLabel, AdminLogin, AuthProvider, LoginCredentials, PhoneNumberChange, UserDetails,
    UserList, UserRole, User, UserUpdate,
};
