pub trait CallbackReporter {
    /// PUTs the report body to the pre-signed URL and returns the HTTP status.
    fn put_report(&self, response_url: &str, body: &str) -> Result<u16, String>;
}
