// End-to-end tests for the Airport Linguist API
//
// Each test boots the full router on an ephemeral port and talks to it over
// real HTTP and WebSocket connections. Translation runs on the built-in
// phrasebook unless a test points the service at a stub Gemini server, so
// the suite needs no network access or credentials.

mod helpers;
mod test_health;
mod test_languages;
