// Typed resource methods: one endpoint/verb pair each, no validation or retries.

use reqwest::Method;
use serde_json::json;

use super::{ApiClient, RequestOptions};
use crate::error::ClientResult;
use crate::models::{
    AdminLogin, ApiEnvelope, Business, BusinessUpdate, DashboardStats, EmploymentDetails,
    EmploymentUpdate, HomePageData, Lead, LeadUpdate, LoanRecord, LoginCredentials, NewBusiness,
    NewLead, PhoneNumberChange, UserDetails, UserList, UserUpdate,
};

impl ApiClient {
    // Employment details

    pub async fn get_employment_details(&self) -> ClientResult<ApiEnvelope<EmploymentDetails>> {
        self.request("/employment-details/", RequestOptions::get()).await
    }

    pub async fn update_employment_details(
        &self,
        update: &EmploymentUpdate,
    ) -> ClientResult<ApiEnvelope<EmploymentDetails>> {
        let options = RequestOptions::new(Method::PUT).json(update)?;
        self.request("/employment-details/", options).await
    }

    // Business

    pub async fn get_all_businesses(&self) -> ClientResult<ApiEnvelope<Vec<Business>>> {
        self.request("/business/list", RequestOptions::get()).await
    }

    pub async fn get_business_by_id(&self, id: &str) -> ClientResult<ApiEnvelope<Business>> {
        self.request(&format!("/business/details/{}", id), RequestOptions::get())
            .await
    }

    pub async fn create_business(&self, business: &NewBusiness) -> ClientResult<ApiEnvelope<Business>> {
        let options = RequestOptions::new(Method::POST).json(business)?;
        self.request("/business/create", options).await
    }

    pub async fn update_business(
        &self,
        id: &str,
        update: &BusinessUpdate,
    ) -> ClientResult<ApiEnvelope<Business>> {
        let options = RequestOptions::new(Method::PUT).json(update)?;
        self.request(&format!("/business/update/{}", id), options).await
    }

    // Leads

    pub async fn get_all_leads(&self) -> ClientResult<ApiEnvelope<Vec<Lead>>> {
        self.request("/leads/", RequestOptions::get()).await
    }

    pub async fn get_lead_by_id(&self, id: &str) -> ClientResult<ApiEnvelope<Lead>> {
        self.request(&format!("/leads/{}", id), RequestOptions::get()).await
    }

    pub async fn create_lead(&self, lead: &NewLead) -> ClientResult<ApiEnvelope<Lead>> {
        let options = RequestOptions::new(Method::POST).json(lead)?;
        self.request("/leads/create", options).await
    }

    pub async fn update_lead(&self, id: &str, update: &LeadUpdate) -> ClientResult<ApiEnvelope<Lead>> {
        let options = RequestOptions::new(Method::PUT).json(update)?;
        self.request(&format!("/leads/{}", id), options).await
    }

    pub async fn get_leads_by_mobile_number(
        &self,
        mobile_number: &str,
    ) -> ClientResult<ApiEnvelope<Vec<Lead>>> {
        self.request(&format!("/leads/mobile/{}", mobile_number), RequestOptions::get())
            .await
    }

    pub async fn get_lead_by_application_number(
        &self,
        application_number: &str,
    ) -> ClientResult<ApiEnvelope<Lead>> {
        self.request(
            &format!("/leads/application/{}", application_number),
            RequestOptions::get(),
        )
        .await
    }

    // Current user

    pub async fn get_user_details(&self) -> ClientResult<ApiEnvelope<UserDetails>> {
        self.request("/users/me", RequestOptions::get()).await
    }

    pub async fn update_user(&self, update: &UserUpdate) -> ClientResult<ApiEnvelope<UserDetails>> {
        let options = RequestOptions::new(Method::PUT).json(update)?;
        self.request("/users/me", options).await
    }

    pub async fn get_user_home_page_data(&self) -> ClientResult<ApiEnvelope<HomePageData>> {
        self.request("/users/home", RequestOptions::get()).await
    }

    /// Ask the backend to send an OTP to `phone_number`. `data` is null.
    pub async fn change_phone_number_request(
        &self,
        phone_number: &str,
    ) -> ClientResult<ApiEnvelope<serde_json::Value>> {
        let options = RequestOptions::new(Method::POST).json(&json!({ "phoneNumber": phone_number }))?;
        self.request("/users/change-phone", options).await
    }

    pub async fn confirm_change_phone_number(
        &self,
        phone_number: &str,
        otp: &str,
    ) -> ClientResult<ApiEnvelope<PhoneNumberChange>> {
        let options = RequestOptions::new(Method::PUT)
            .json(&json!({ "phoneNumber": phone_number, "otp": otp }))?;
        self.request("/users/change-phone", options).await
    }

    // Admin

    /// Sends credentials only; storing the token is the caller's job
    /// (see [`crate::auth::login`]).
    pub async fn admin_login(&self, email: &str, password: &str) -> ClientResult<ApiEnvelope<AdminLogin>> {
        self.admin_login_exchange(email, password)
            .await
            .map(|(_, envelope)| envelope)
    }

    /// Login reply along with its transport status.
    pub(crate) async fn admin_login_exchange(
        &self,
        email: &str,
        password: &str,
    ) -> ClientResult<(u16, ApiEnvelope<AdminLogin>)> {
        let credentials = LoginCredentials {
            email: email.to_string(),
            password: password.to_string(),
        };
        let options = RequestOptions::new(Method::POST).json(&credentials)?;
        self.request_with_status("/admin/login", options).await
    }

    pub async fn get_admin_users(&self) -> ClientResult<ApiEnvelope<UserList>> {
        self.request("/admin/users", RequestOptions::get()).await
    }

    pub async fn get_admin_loans(&self) -> ClientResult<ApiEnvelope<Vec<LoanRecord>>> {
        self.request("/admin/loans", RequestOptions::get()).await
    }

    pub async fn get_admin_dashboard_stats(&self) -> ClientResult<ApiEnvelope<DashboardStats>> {
        self.request("/admin/dashboard-stats", RequestOptions::get()).await
    }
}
