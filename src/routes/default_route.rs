use actix_web::{get, HttpResponse, Responder};

#[get("/")]
pub async fn default() -> impl Responder {
    HttpResponse::Ok().body("POST a CSV with a `domain` header to /enrich")
}

#[get("/health_check")]
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().finish()
}

#[cfg(test)]
mod tests {
    use actix_web::{http::StatusCode, test, App};

    use super::{default, health_check};

    #[actix_web::test]
    async fn health_check_is_ok_and_empty() {
        let app = test::init_service(App::new().service(health_check).service(default)).await;

        let res = test::call_service(&app, test::TestRequest::get().uri("/health_check").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
        assert!(test::read_body(res).await.is_empty());

        let res = test::call_service(&app, test::TestRequest::get().uri("/").to_request()).await;
        assert_eq!(res.status(), StatusCode::OK);
    }
}
