//! Fixed auth page templates: sign-in, MFA setup and MFA verification.
//!
//! These are static forms rather than metadata-driven ones; the MFA pages
//! carry the hooks (`qrcode` container, copy button, code input) that
//! `patina-hydrate` attaches behavior to.

use patina_contract::{
    AdminRoutes, CODE_INPUT_ID, COPY_BUTTON_CLASS, COPY_ICON_CLASS, HIDDEN_CLASS,
    MFA_SETUP_VIEW_CLASS, OTPAUTH_URL_ATTR, QR_CONTAINER_ID, SECRET_TEXT_CLASS, SUCCESS_ICON_CLASS,
};

use super::html_escape;

/// Renders the sign-in form.
pub fn render_sign_in_view(routes: &AdminRoutes, error: Option<&str>) -> String {
    format!(
        r#"<div class="login-view">
<div class="login-card">
<h1 class="login-title">Admin</h1>
{error}<form action="{action}" method="post">
<div class="form-group">
<label class="form-label" for="username">Username</label>
<input type="text" class="form-input" id="username" name="username" placeholder="Enter your username" required>
</div>
<div class="form-group">
<label class="form-label" for="password">Password</label>
<input type="password" class="form-input" id="password" name="password" placeholder="Enter your password" required>
</div>
<button type="submit" class="button button-primary button-full">Sign In</button>
<a class="login-back-link" href="/">&larr; Back to Site</a>
</form>
</div>
</div>"#,
        error = render_error("login-error", error),
        action = html_escape(&routes.login()),
    )
}

/// Renders the MFA setup page.
///
/// The enrollment URI travels in a data attribute on the container; the QR
/// container ships empty and is drawn client-side. The success icon starts
/// hidden and is swapped in for two seconds after each copy.
pub fn render_mfa_setup_view(
    routes: &AdminRoutes,
    secret: &str,
    otpauth_url: &str,
    account_name: &str,
) -> String {
    format!(
        r#"<div class="{MFA_SETUP_VIEW_CLASS}" {OTPAUTH_URL_ATTR}="{otpauth}">
<div class="setup-mfa-card">
<h1 class="setup-mfa-title">Secure Your Account</h1>
<p class="setup-mfa-subtitle">Multi-factor authentication (MFA) adds an extra layer of security to your admin account.</p>
<p class="setup-mfa-account">{account}</p>
<div class="setup-mfa-grid">
<div class="setup-mfa-qrcode-container">
<div id="{QR_CONTAINER_ID}" class="setup-mfa-qrcode-canvas"></div>
</div>
<div class="setup-mfa-instructions">
<h3 class="setup-mfa-step-heading">Step 1: Scan QR Code</h3>
<p class="setup-mfa-step-text">Open your authenticator app (Google Authenticator, 1Password, Authy) and scan this QR code.</p>
<h3 class="setup-mfa-step-heading">Step 2: Backup Secret</h3>
<p class="setup-mfa-step-text">If you can&#x27;t scan the QR code, enter this secret manually:</p>
<div class="setup-mfa-secret-container">
<code class="{SECRET_TEXT_CLASS}">{secret}</code>
<button type="button" class="{COPY_BUTTON_CLASS}">
<span class="{COPY_ICON_CLASS}"></span>
<span class="{SUCCESS_ICON_CLASS} {HIDDEN_CLASS}"></span>
</button>
</div>
</div>
</div>
<div class="setup-mfa-verify-section">
<form action="{action}" method="post">
<input type="hidden" name="secret" value="{secret}">
<label class="setup-mfa-verify-label" for="{CODE_INPUT_ID}">Verify Setup</label>
<p class="setup-mfa-verify-instructions">Enter the 6-digit code from your app to confirm setup:</p>
<input type="text" class="setup-mfa-verify-input" id="{CODE_INPUT_ID}" name="code" placeholder="000000" required>
<button type="submit" class="button button-primary setup-mfa-enable-button">Enable MFA</button>
</form>
</div>
<div class="setup-mfa-footer">
<a class="setup-mfa-cancel-link" href="{base}">Cancel and return to dashboard</a>
</div>
</div>
</div>"#,
        otpauth = html_escape(otpauth_url),
        account = html_escape(account_name),
        secret = html_escape(secret),
        action = html_escape(&routes.mfa_setup()),
        base = html_escape(routes.base()),
    )
}

/// Renders the MFA verification page shown during login.
pub fn render_mfa_verify_view(
    routes: &AdminRoutes,
    username: &str,
    error: Option<&str>,
) -> String {
    format!(
        r#"<div class="verify-mfa-view">
<div class="verify-mfa-card">
<h1 class="verify-mfa-title">Two-Factor Authentication</h1>
<p class="verify-mfa-description">Please enter the 6-digit code from your authenticator app to complete the login process for <strong>{username}</strong>.</p>
{error}<form action="{action}" method="post">
<input type="hidden" name="username" value="{username}">
<div class="verify-mfa-form-group">
<label class="verify-mfa-label" for="{CODE_INPUT_ID}">Verification Code</label>
<input type="text" class="verify-mfa-input" id="{CODE_INPUT_ID}" name="code" placeholder="000000" required>
</div>
<button type="submit" class="button button-primary button-full">Verify</button>
</form>
</div>
</div>"#,
        username = html_escape(username),
        error = render_error("verify-mfa-error", error),
        action = html_escape(&routes.mfa_verify()),
    )
}

fn render_error(class: &str, error: Option<&str>) -> String {
    match error {
        Some(message) => format!(
            r#"<div class="{class}-container"><p class="{class}">{}</p></div>
"#,
            html_escape(message)
        ),
        None => String::new(),
    }
}
