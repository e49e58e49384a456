//! The two-step recovery flow
//!
//! The failed-login request seeds server-side session state that the
//! recovery page reads back, so both requests must share one cookie session
//! and run in this order.

use dialtrace_source_api::{
    LookupContext,
    SourceResult,
};

pub(crate) const LOGIN_URL: &str =
    "https://www.ok.ru/dk?st.cmd=anonymMain&st.accRecovery=on&st.error=errors.password.wrong";

pub(crate) const RECOVER_URL: &str =
    "https://www.ok.ru/dk?st.cmd=anonymRecoveryAfterFailedLogin&st._aid=LeftColumn_Login_ForgotPassword";

pub(crate) fn failed_login_url(phone: &str) -> String {
    format!("{LOGIN_URL}&st.email={}", urlencoding::encode(phone))
}

/// Runs the failed login for the number in `ctx` and returns the recovery page body.
pub(crate) async fn fetch_recovery_page(ctx: &LookupContext<'_>) -> SourceResult<String> {
    let session = ctx.transport.session()?;

    session
        .get(ctx.request(failed_login_url(ctx.phone.as_str())))
        .await?;

    let recovery = session.get(ctx.request(RECOVER_URL)).await?;
    Ok(recovery.body)
}
