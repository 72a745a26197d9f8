use mvr_e2e_tests::{launch_env, prepare_env};
use tracing_test::traced_test;

#[tokio::test]
#[traced_test]
async fn test_health() {
    let (args, _config_guard) = prepare_env("test_health").await.unwrap();

    let base_url = args.base_url.clone();

    let (client, _server) = launch_env(args).await.unwrap();

    let response = client
        .get(base_url.join("health").unwrap())
        .send()
        .await
        .unwrap();
    assert!(response.status().is_success());
    assert_eq!(response.text().await.unwrap(), "OK");
}
