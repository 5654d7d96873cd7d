use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use crate::db::{DeleteReceipt, InsertReceipt, UpdateReceipt};
use crate::modules::auth::model::{Claims, IssueTokenDto, TokenResponse};
use crate::modules::classes::model::{
    CreateClassDto, UpdateClassDto, UpdateFeedbackDto, UpdateStatusDto,
};
use crate::modules::enrollments::model::CreateEnrollmentDto;
use crate::modules::payments::model::{
    CreatePaymentIntentDto, PaymentIntentResponse, RecordPaymentDto,
};
use crate::modules::users::model::{
    AdminCheckResponse, InstructorCheckResponse, RegisterUserDto, Role,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::issue_token,
        crate::modules::users::controller::register_user,
        crate::modules::users::controller::get_users,
        crate::modules::users::controller::get_instructors,
        crate::modules::users::controller::check_admin,
        crate::modules::users::controller::check_instructor,
        crate::modules::users::controller::promote_admin,
        crate::modules::users::controller::promote_instructor,
        crate::modules::users::controller::delete_user,
        crate::modules::classes::controller::get_classes,
        crate::modules::classes::controller::create_class,
        crate::modules::classes::controller::get_classes_by_instructor,
        crate::modules::classes::controller::update_class,
        crate::modules::classes::controller::update_class_status,
        crate::modules::classes::controller::update_class_feedback,
        crate::modules::enrollments::controller::create_enrollment,
        crate::modules::enrollments::controller::get_enrollments,
        crate::modules::enrollments::controller::delete_enrollment,
        crate::modules::payments::controller::record_payment,
        crate::modules::payments::controller::get_payments_by_email,
        crate::modules::payments::controller::get_payments_by_class,
        crate::modules::payments::controller::create_payment_intent,
    ),
    components(
        schemas(
            Claims,
            IssueTokenDto,
            TokenResponse,
            RegisterUserDto,
            Role,
            AdminCheckResponse,
            InstructorCheckResponse,
            CreateClassDto,
            UpdateClassDto,
            UpdateStatusDto,
            UpdateFeedbackDto,
            CreateEnrollmentDto,
            RecordPaymentDto,
            CreatePaymentIntentDto,
            PaymentIntentResponse,
            InsertReceipt,
            UpdateReceipt,
            DeleteReceipt,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Auth", description = "Token issuance"),
        (name = "Users", description = "Registration, roles and user management"),
        (name = "Classes", description = "Course class management"),
        (name = "Enrollments", description = "Class enrollment and withdrawal"),
        (name = "Payments", description = "Payment records and payment intents")
    ),
    info(
        title = "snapschool API",
        version = "0.1.0",
        description = "Backend API for the snapschool online-course platform: users and roles, course classes, enrollments and payments.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
