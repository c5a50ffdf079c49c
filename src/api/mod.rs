//! Resource façades: named groupings of gateway calls fixed to one backend
//! resource. They hold no state and add no logic.

use crate::client::ApiClient;
use crate::error::ClientResult;
use crate::models::{
    AdminLogin, ApiEnvelope, Business, BusinessUpdate, DashboardStats, EmploymentDetails,
    EmploymentUpdate, HomePageData, Lead, LeadUpdate, LoanRecord, NewBusiness, NewLead,
    PhoneNumberChange, UserDetails, UserList, UserUpdate,
};

#[derive(Clone, Copy)]
pub struct EmploymentApi<'a> {
    client: &'a ApiClient,
}

#[derive(Clone, Copy)]
pub struct BusinessApi<'a> {
    client: &'a ApiClient,
}

#[derive(Clone, Copy)]
pub struct LeadsApi<'a> {
    client: &'a ApiClient,
}

#[derive(Clone, Copy)]
pub struct UserApi<'a> {
    client: &'a ApiClient,
}

#[derive(Clone, Copy)]
pub struct AdminApi<'a> {
    client: &'a ApiClient,
}

impl ApiClient {
    pub fn employment(&self) -> EmploymentApi<'_> {
        EmploymentApi { client: self }
    }

    pub fn business(&self) -> BusinessApi<'_> {
        BusinessApi { client: self }
    }

    pub fn leads(&self) -> LeadsApi<'_> {
        LeadsApi { client: self }
    }

    pub fn users(&self) -> UserApi<'_> {
        UserApi { client: self }
    }

    pub fn admin(&self) -> AdminApi<'_> {
        AdminApi { client: self }
    }
}

impl EmploymentApi<'_> {
    pub async fn get(&self) -> ClientResult<ApiEnvelope<EmploymentDetails>> {
        self.client.get_employment_details().await
    }

    pub async fn update(&self, update: &EmploymentUpdate) -> ClientResult<ApiEnvelope<EmploymentDetails>> {
        self.client.update_employment_details(update).await
    }
}

impl BusinessApi<'_> {
    pub async fn get_all(&self) -> ClientResult<ApiEnvelope<Vec<Business>>> {
        self.client.get_all_businesses().await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<ApiEnvelope<Business>> {
        self.client.get_business_by_id(id).await
    }

    pub async fn create(&self, business: &NewBusiness) -> ClientResult<ApiEnvelope<Business>> {
        self.client.create_business(business).await
    }

    pub async fn update(&self, id: &str, update: &BusinessUpdate) -> ClientResult<ApiEnvelope<Business>> {
        self.client.update_business(id, update).await
    }
}

impl LeadsApi<'_> {
    pub async fn get_all(&self) -> ClientResult<ApiEnvelope<Vec<Lead>>> {
        self.client.get_all_leads().await
    }

    pub async fn get_by_id(&self, id: &str) -> ClientResult<ApiEnvelope<Lead>> {
        self.client.get_lead_by_id(id).await
    }

    pub async fn create(&self, lead: &NewLead) -> ClientResult<ApiEnvelope<Lead>> {
        self.client.create_lead(lead).await
    }

    pub async fn update(&self, id: &str, update: &LeadUpdate) -> ClientResult<ApiEnvelope<Lead>> {
        self.client.update_lead(id, update).await
    }

    pub async fn get_by_mobile(&self, mobile_number: &str) -> ClientResult<ApiEnvelope<Vec<Lead>>> {
        self.client.get_leads_by_mobile_number(mobile_number).await
    }

    pub async fn get_by_application_number(&self, application_number: &str) -> ClientResult<ApiEnvelope<Lead>> {
        self.client
            .get_lead_by_application_number(application_number)
            .await
    }
}

impl UserApi<'_> {
    pub async fn get_details(&self) -> ClientResult<ApiEnvelope<UserDetails>> {
        self.client.get_user_details().await
    }

    pub async fn update(&self, update: &UserUpdate) -> ClientResult<ApiEnvelope<UserDetails>> {
        self.client.update_user(update).await
    }

    pub async fn get_home_page_data(&self) -> ClientResult<ApiEnvelope<HomePageData>> {
        self.client.get_user_home_page_data().await
    }

    pub async fn change_phone_request(&self, phone_number: &str) -> ClientResult<ApiEnvelope<serde_json::Value>> {
        self.client.change_phone_number_request(phone_number).await
    }

    pub async fn confirm_phone_change(
        &self,
        phone_number: &str,
        otp: &str,
    ) -> ClientResult<ApiEnvelope<PhoneNumberChange>> {
        self.client.confirm_change_phone_number(phone_number, otp).await
    }
}

impl AdminApi<'_> {
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<ApiEnvelope<AdminLogin>> {
        self.client.admin_login(email, password).await
    }

    pub async fn get_users(&self) -> ClientResult<ApiEnvelope<UserList>> {
        self.client.get_admin_users().await
    }

    pub async fn get_loans(&self) -> ClientResult<ApiEnvelope<Vec<LoanRecord>>> {
        self.client.get_admin_loans().await
    }

    pub async fn get_dashboard_stats(&self) -> ClientResult<ApiEnvelope<DashboardStats>> {
        self.client.get_admin_dashboard_stats().await
    }
}
