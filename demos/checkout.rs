//! Console walkthrough of a card checkout: create a customer, take a
//! payment, check its status, refund it, then list refunds.
//!
//! ```sh
//! HYPERSWITCH_SECRET_KEY=sk_... HYPERSWITCH_PUBLISHABLE_KEY=pk_... \
//!     cargo run --example checkout
//! ```

use std::env;

use hyperswitch::models::common::{CardDetails, PaymentMethodData};
use hyperswitch::models::customer::CustomerCreateRequest;
use hyperswitch::models::payment::PaymentCreateRequest;
use hyperswitch::models::refund::{RefundCreateRequest, RefundListRequest};
use hyperswitch::services::{CustomerService, PaymentService, RefundService};
use hyperswitch::{HyperswitchClient, HyperswitchError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let secret_key = env::var("HYPERSWITCH_SECRET_KEY")?;
    let publishable_key = env::var("HYPERSWITCH_PUBLISHABLE_KEY")?;

    let mut builder = HyperswitchClient::builder(secret_key, publishable_key);
    if let Ok(profile_id) = env::var("HYPERSWITCH_PROFILE_ID") {
        builder = builder.with_default_profile_id(profile_id);
    }
    let client = builder.build()?;

    let customers = CustomerService::new(&client);
    let payments = PaymentService::new(&client);
    let refunds = RefundService::new(&client);

    let customer = customers
        .create(&CustomerCreateRequest {
            name: Some("Jenny Rosen".to_string()),
            email: Some("jenny.rosen@example.com".to_string()),
            ..Default::default()
        })
        .await?
        .ok_or("customer create returned no body")?;
    println!("created customer {:?}", customer.customer_id);

    let mut create = PaymentCreateRequest::new(6540, "USD");
    create.customer_id = customer.customer_id.clone();
    create.description = Some("demo checkout".to_string());
    create.payment_method = Some("card".to_string());
    create.payment_method_data = Some(PaymentMethodData {
        card: Some(CardDetails {
            card_number: Some("4242424242424242".to_string()),
            card_exp_month: Some("10".to_string()),
            card_exp_year: Some("2035".to_string()),
            card_cvc: Some("123".to_string()),
        }),
        billing: None,
    });

    let payment = payments
        .create(create)
        .await?
        .ok_or("payment create returned no body")?;
    let payment_id = payment.payment_id.clone().ok_or("payment without id")?;
    println!(
        "created payment {payment_id} with status {:?}",
        payment.status
    );

    let synced = payments.sync_status(&payment_id, true).await?;
    println!(
        "synced status: {:?}",
        synced.as_ref().and_then(|p| p.status.as_deref())
    );

    match refunds.create(&RefundCreateRequest::new(&payment_id)).await {
        Ok(Some(refund)) => println!(
            "created refund {:?} with status {:?}",
            refund.refund_id, refund.status
        ),
        Ok(None) => println!("refund create returned no body"),
        // A payment that is still processing cannot be refunded yet; show
        // the structured error rather than bailing out.
        Err(HyperswitchError::Api {
            status,
            code,
            message,
            ..
        }) => println!("refund rejected ({status}, {code:?}): {message}"),
        Err(other) => return Err(other.into()),
    }

    let listed = refunds
        .list(Some(RefundListRequest {
            payment_id: Some(payment_id.clone()),
            ..Default::default()
        }))
        .await?;
    if let Some(listed) = listed {
        println!("{} refund(s) for {payment_id}", listed.count);
    }

    Ok(())
}
