use actix_web::{Responder, get, web};
use tera::Tera;

use crate::routes::{base_context, redirect, render_template};

#[get("/")]
pub async fn show_index() -> impl Responder {
    redirect("/search")
}

#[get("/about")]
pub async fn show_about(tera: web::Data<Tera>) -> impl Responder {
    let context = base_context("about");
    render_template(&tera, "main/about.html", &context)
}
