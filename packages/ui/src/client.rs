use api::UsersClient;

/// Build the client the components call the collection endpoint with.
pub(crate) fn make_client() -> UsersClient {
    UsersClient::default()
}
