//! Local `tiny_http` stand-in for the remote service.

use std::sync::{Arc, Mutex};

use club_api::ClubClient;
use club_config::ApiConfig;

pub struct MockServer {
    base_url: String,
    paths: Arc<Mutex<Vec<String>>>,
}

impl MockServer {
    /// Serve `routes` as `(path, status, body)`; anything else is a 404.
    pub fn start(routes: Vec<(&'static str, u16, String)>) -> Self {
        let server = tiny_http::Server::http("127.0.0.1:0").unwrap();
        let port = server.server_addr().to_ip().unwrap().port();
        let paths = Arc::new(Mutex::new(Vec::new()));
        let log = Arc::clone(&paths);

        std::thread::spawn(move || {
            for request in server.incoming_requests() {
                let url = request.url().to_string();
                log.lock().unwrap().push(url.clone());

                let (status, body) = routes
                    .iter()
                    .find(|(path, _, _)| *path == url)
                    .map_or((404, String::from("{}")), |(_, status, body)| {
                        (*status, body.clone())
                    });
                let _ = request
                    .respond(tiny_http::Response::from_string(body).with_status_code(status));
            }
        });

        Self {
            base_url: format!("http://127.0.0.1:{port}/api"),
            paths,
        }
    }

    pub fn client(&self) -> ClubClient {
        let config = ApiConfig {
            ncfa_token: "test-cookie".into(),
            base_url: self.base_url.clone(),
            ..Default::default()
        };
        ClubClient::new(&config, None).unwrap()
    }

    /// Request paths received so far, in arrival order.
    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }
}
