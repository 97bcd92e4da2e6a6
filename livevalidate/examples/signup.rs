//! Signup Form Example
//!
//! A demo wiring a small signup form through the engine:
//! - text/email/password fields with required flags
//! - a radio group and a checkbox group
//! - whole-form validation with callbacks instead of native submission

use formdom::{Field, FieldEvent, Form};
use livevalidate::{FormConfig, FormController};
use log::LevelFilter;
use simplelog::{Config, SimpleLogger};

fn main() {
    SimpleLogger::init(LevelFilter::Info, Config::default()).unwrap();

    let form = Form::new()
        .with(Field::text().id("username").name("username").required(true))
        .with(Field::email().id("mail").name("mail").required(true))
        .with(Field::password().id("pass").name("pass").required(true))
        .with(Field::radio("plan").id("plan-free").value("free").checked(true))
        .with(Field::radio("plan").id("plan-pro").value("pro"))
        .with(Field::checkbox().id("terms").name("terms").required(true))
        .with(Field::submit().id("go"));

    let config = FormConfig::new()
        .prevent_submit(true)
        .scroll_to_error(true)
        .on_success(|data| {
            println!("signup ok: {}", serde_json::to_string_pretty(data).unwrap());
        })
        .on_error(|summary| {
            println!("{} field(s) need attention: {summary}", summary.count());
        });

    let controller = FormController::attach(form, config);

    // First attempt: everything empty except the plan radio.
    controller.dispatch(&FieldEvent::SubmitActivated { target: None });

    // Fill the form in and try again.
    let form = controller.form();
    form.field("username").unwrap().set_value("ada");
    form.field("mail").unwrap().set_value("ada@example.com");
    form.field("pass").unwrap().set_value("Sup3r-secret");
    form.field("terms").unwrap().set_checked(true);

    controller.dispatch(&FieldEvent::SubmitActivated { target: None });
}
