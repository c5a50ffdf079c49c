mod common;

use std::sync::Arc;

use anyhow::Result;
use serde_json::{json, Value};

use common::StubBackend;
use loan_admin_client::models::{
    BusinessUpdate, EmploymentType, EmploymentUpdate, LeadUpdate, NewBusiness, NewLead, UserUpdate,
};
use loan_admin_client::MemorySessionStore;

fn lead_json() -> Value {
    json!({
        "_id": "l1",
        "name": "Asha Rao",
        "city": "Pune",
        "pincode": "411001",
        "loanType": "personal",
        "amount": "50000",
        "tenure": "12",
        "mobileNumber": "9000000001",
        "status": "pending",
        "applicationNumber": "APP-1001",
        "createdAt": "2024-05-01T10:00:00.000Z"
    })
}

fn business_json() -> Value {
    json!({
        "_id": "b1",
        "businessType": "retail",
        "turnover": "1200000",
        "loanAmount": "250000",
        "mobileNumber": "9000000002"
    })
}

fn object_keys(value: &Value) -> Vec<String> {
    let mut keys: Vec<_> = value.as_object().map(|o| o.keys().cloned().collect()).unwrap_or_default();
    keys.sort();
    keys
}

#[tokio::test]
async fn read_endpoints_map_to_fixed_paths() -> Result<()> {
    let stub = StubBackend::start().await?;
    stub.ok("GET", "/business/details/b1", business_json());
    stub.ok("GET", "/leads/l1", lead_json());
    stub.ok("GET", "/leads/mobile/9000000001", json!([lead_json()]));
    stub.ok("GET", "/leads/application/APP-1001", lead_json());
    stub.ok("GET", "/admin/dashboard-stats", json!({ "totalUsers": 3, "totalAmount": 125000.5 }));

    let client = stub.client(Arc::new(MemorySessionStore::with_token("abc")));

    let business = client.business().get_by_id("b1").await?.into_data().unwrap();
    assert_eq!(business.loan_amount, "250000");

    let lead = client.leads().get_by_id("l1").await?.into_data().unwrap();
    assert_eq!(lead.application_number, "APP-1001");
    assert!(lead.created_at.is_some());

    let by_mobile = client.leads().get_by_mobile("9000000001").await?.into_data().unwrap();
    assert_eq!(by_mobile.len(), 1);

    client.leads().get_by_application_number("APP-1001").await?;

    let stats = client.admin().get_dashboard_stats().await?.into_data().unwrap();
    assert_eq!(stats.total_users, Some(3));

    let seen: Vec<_> = stub
        .requests()
        .into_iter()
        .map(|r| format!("{} {}", r.method, r.path))
        .collect();
    assert_eq!(
        seen,
        vec![
            "GET /business/details/b1",
            "GET /leads/l1",
            "GET /leads/mobile/9000000001",
            "GET /leads/application/APP-1001",
            "GET /admin/dashboard-stats",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn create_lead_sends_only_caller_fields() -> Result<()> {
    let stub = StubBackend::start().await?;
    stub.respond(
        "POST",
        "/leads/create",
        201,
        json!({ "success": true, "status": 201, "message": "Lead created", "data": lead_json() }),
    );

    let new_lead = NewLead {
        name: "Asha Rao".into(),
        city: "Pune".into(),
        pincode: "411001".into(),
        loan_type: "personal".into(),
        amount: "50000".into(),
        tenure: "12".into(),
        mobile_number: "9000000001".into(),
    };
    let envelope = stub.anonymous_client().leads().create(&new_lead).await?;
    assert_eq!(envelope.status, 201);

    let request = stub.last_request();
    assert_eq!(request.method, "POST");
    assert_eq!(request.path, "/leads/create");
    assert_eq!(
        object_keys(&request.json()),
        vec!["amount", "city", "loanType", "mobileNumber", "name", "pincode", "tenure"]
    );
    Ok(())
}

#[tokio::test]
async fn create_business_sends_only_caller_fields() -> Result<()> {
    let stub = StubBackend::start().await?;
    stub.ok("POST", "/business/create", business_json());

    let new_business = NewBusiness {
        business_type: "retail".into(),
        turnover: "1200000".into(),
        loan_amount: "250000".into(),
        mobile_number: "9000000002".into(),
    };
    stub.anonymous_client().business().create(&new_business).await?;

    let body = stub.last_request().json();
    assert_eq!(
        body,
        json!({
            "businessType": "retail",
            "turnover": "1200000",
            "loanAmount": "250000",
            "mobileNumber": "9000000002"
        })
    );
    Ok(())
}

#[tokio::test]
async fn partial_updates_use_put_and_omit_unset_fields() -> Result<()> {
    let stub = StubBackend::start().await?;
    stub.ok("PUT", "/business/update/b1", business_json());
    stub.ok("PUT", "/leads/l1", lead_json());
    stub.ok(
        "PUT",
        "/employment-details/",
        json!({ "userId": "u1", "netMonthlyIncome": "60000", "employmentType": "salaried" }),
    );
    stub.ok(
        "PUT",
        "/users/me",
        json!({ "user": { "fullName": "Asha R", "role": "admin", "authProvider": "google" } }),
    );

    let client = stub.anonymous_client();
    client
        .business()
        .update("b1", &BusinessUpdate { loan_amount: Some("300000".into()), ..Default::default() })
        .await?;
    client
        .leads()
        .update("l1", &LeadUpdate { status: Some("approved".into()), ..Default::default() })
        .await?;
    client
        .employment()
        .update(&EmploymentUpdate {
            employment_type: Some(EmploymentType::Salaried),
            net_monthly_income: Some("60000".into()),
            ..Default::default()
        })
        .await?;
    let user = client
        .users()
        .update(&UserUpdate { full_name: Some("Asha R".into()), ..Default::default() })
        .await?;
    assert_eq!(user.into_data().unwrap().user.full_name, "Asha R");

    let requests = stub.requests();
    assert!(requests.iter().all(|r| r.method == "PUT"));
    assert_eq!(requests[0].json(), json!({ "loanAmount": "300000" }));
    assert_eq!(requests[1].json(), json!({ "status": "approved" }));
    assert_eq!(
        requests[2].json(),
        json!({ "employmentType": "salaried", "netMonthlyIncome": "60000" })
    );
    assert_eq!(requests[3].json(), json!({ "fullName": "Asha R" }));
    Ok(())
}

#[tokio::test]
async fn phone_change_request_and_confirm_share_one_path() -> Result<()> {
    let stub = StubBackend::start().await?;
    stub.ok("POST", "/users/change-phone", Value::Null);
    stub.ok("PUT", "/users/change-phone", json!({ "phoneNumber": "9111111111" }));

    let client = stub.client(Arc::new(MemorySessionStore::with_token("abc")));
    let requested = client.users().change_phone_request("9111111111").await?;
    assert!(requested.data.is_none());

    let confirmed = client.users().confirm_phone_change("9111111111", "123456").await?;
    assert_eq!(confirmed.into_data().unwrap().phone_number, "9111111111");

    let requests = stub.requests();
    assert_eq!(requests[0].method, "POST");
    assert_eq!(requests[0].json(), json!({ "phoneNumber": "9111111111" }));
    assert_eq!(requests[1].method, "PUT");
    assert_eq!(requests[1].json(), json!({ "phoneNumber": "9111111111", "otp": "123456" }));
    Ok(())
}

#[tokio::test]
async fn get_requests_carry_no_body() -> Result<()> {
    let stub = StubBackend::start().await?;
    stub.ok("GET", "/employment-details/", json!({
        "userId": "u1", "netMonthlyIncome": "0", "employmentType": "unemployed"
    }));

    let details = stub.anonymous_client().employment().get().await?.into_data().unwrap();
    assert_eq!(details.employment_type, EmploymentType::Unemployed);
    assert_eq!(stub.last_request().body, "");
    Ok(())
}

#[tokio::test]
async fn loan_list_survives_unreadable_amounts() -> Result<()> {
    let stub = StubBackend::start().await?;
    stub.ok("GET", "/admin/loans", json!([
        { "_id": "a", "userId": "u1", "amount": 1000, "status": "approved" },
        { "_id": "b", "userId": "u1", "amount": "", "status": "pending" }
    ]));

    let client = stub.client(Arc::new(MemorySessionStore::with_token("abc")));
    let loans = client.admin().get_loans().await?.into_data().unwrap();
    assert_eq!(loans.len(), 2);
    assert_eq!(loans[0].amount.map(|a| a.to_string()).as_deref(), Some("1000"));
    assert_eq!(loans[1].amount, None);
    assert_eq!(loans[1].status.as_deref(), Some("pending"));
    Ok(())
}
