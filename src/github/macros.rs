#[macro_export]
macro_rules! get {
    ($url:expr, $token:expr) => {{
        use $crate::http::{Headers, ResponseHandler};

        $crate::http::HttpClient::new()
            .get($url)
            .default_headers($token)
            .send()
            .await
            .handle()
            .await
    }};
}
