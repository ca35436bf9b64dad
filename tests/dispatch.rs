use async_trait::async_trait;
use polyglot_skill::skill::translator::TranslateRequest;
use polyglot_skill::skill::{SkillError, TranslationService};
use polyglot_skill::{InvocationContext, SkillRuntime};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

const APOLOGY_SSML: &str =
    "<speak>Sorry, I don't understand your command. Please say it again.</speak>";

struct StubService {
    reply: Result<String, SkillError>,
    calls: Mutex<Vec<TranslateRequest>>,
}

impl StubService {
    fn new(reply: Result<String, SkillError>) -> Arc<Self> {
        Arc::new(Self {
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    fn calls(&self) -> Vec<TranslateRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl TranslationService for StubService {
    async fn translate_text(&self, request: &TranslateRequest) -> Result<String, SkillError> {
        self.calls.lock().unwrap().push(request.clone());
        self.reply.clone()
    }
}

fn fixture(raw: &str) -> Value {
    serde_json::from_str(raw).unwrap()
}

fn translate_event(dialog_state: &str, word: Option<&str>, language: &str) -> Value {
    let mut slots = json!({ "language": { "name": "language", "value": language } });
    slots["word"] = match word {
        Some(word) => json!({ "name": "word", "value": word }),
        None => json!({ "name": "word" }),
    };

    json!({
        "version": "1.0",
        "request": {
            "type": "IntentRequest",
            "requestId": "it-1",
            "dialogState": dialog_state,
            "intent": { "name": "Translate", "slots": slots }
        }
    })
}

async fn invoke(runtime: &SkillRuntime, event: Value) -> Value {
    runtime.on_event(event, &InvocationContext::new("it")).await
}

#[tokio::test]
async fn launch_is_answered_by_welcome() {
    let runtime = SkillRuntime::with_service(StubService::new(Ok("unused".into())));
    let event = fixture(include_str!("../demos/events/launch.json"));

    let first = invoke(&runtime, event.clone()).await;
    let second = invoke(&runtime, event).await;

    assert_eq!(first, second);
    assert_eq!(first["version"], "1.0");
    assert_eq!(
        first["response"]["outputSpeech"]["ssml"],
        "<speak>Welcome, this is an example skill! Start by saying translate</speak>"
    );
    assert_eq!(first["response"]["card"]["title"], "Welcome");
    assert_eq!(first["response"]["shouldEndSession"], false);
}

#[tokio::test]
async fn open_dialog_delegates_without_translating() {
    let service = StubService::new(Ok("unused".into()));
    let runtime = SkillRuntime::with_service(service.clone());

    let started = invoke(&runtime, fixture(include_str!("../demos/events/translate-started.json"))).await;
    let in_progress = invoke(&runtime, translate_event("IN_PROGRESS", Some("hello"), "french")).await;

    for response in [started, in_progress] {
        assert_eq!(response["response"]["directives"], json!([{ "type": "Dialog.Delegate" }]));
        assert!(response["response"].get("outputSpeech").is_none());
    }
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn completed_dialog_speaks_translation() {
    let service = StubService::new(Ok("bonjour".into()));
    let runtime = SkillRuntime::with_service(service.clone());

    let response = invoke(&runtime, fixture(include_str!("../demos/events/translate-completed.json"))).await;

    assert_eq!(response["response"]["outputSpeech"]["ssml"], "<speak>bonjour</speak>");
    assert_eq!(response["response"]["reprompt"]["outputSpeech"]["ssml"], "<speak>bonjour</speak>");
    assert_eq!(response["sessionAttributes"], json!({ "lastIntent": "Translate" }));

    let calls = service.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].source_language_code, "en");
    assert_eq!(calls[0].target_language_code, "fr");
    assert_eq!(calls[0].text, "hello");
}

#[tokio::test]
async fn unknown_language_is_apologized_for() {
    let service = StubService::new(Ok("unused".into()));
    let runtime = SkillRuntime::with_service(service.clone());

    let response = invoke(&runtime, translate_event("COMPLETED", Some("hi"), "klingon")).await;

    assert_eq!(response["response"]["outputSpeech"]["ssml"], APOLOGY_SSML);
    assert_eq!(response["response"]["reprompt"]["outputSpeech"]["ssml"], APOLOGY_SSML);
    assert!(service.calls().is_empty());
}

#[tokio::test]
async fn gateway_failure_is_apologized_for() {
    let service = StubService::new(Err(SkillError::Gateway("ThrottlingException".into())));
    let runtime = SkillRuntime::with_service(service.clone());

    let response = invoke(&runtime, translate_event("COMPLETED", Some("hi"), "Japanese")).await;

    assert_eq!(response["response"]["outputSpeech"]["ssml"], APOLOGY_SSML);
    assert_eq!(service.calls().len(), 1);
}

#[tokio::test]
async fn empty_word_is_replaced_only_when_missing() {
    let service = StubService::new(Ok("ok".into()));
    let runtime = SkillRuntime::with_service(service.clone());

    invoke(&runtime, translate_event("COMPLETED", None, "german")).await;
    invoke(&runtime, translate_event("COMPLETED", Some(""), "german")).await;
    invoke(&runtime, translate_event("COMPLETED", Some("cat"), "german")).await;

    let texts: Vec<String> = service.calls().into_iter().map(|c| c.text).collect();
    assert_eq!(texts, vec!["Hello World", "Hello World", "cat"]);
}

#[tokio::test]
async fn session_end_returns_empty_response() {
    let runtime = SkillRuntime::with_service(StubService::new(Ok("unused".into())));

    let response = invoke(&runtime, fixture(include_str!("../demos/events/session-ended.json"))).await;

    assert_eq!(response["response"], json!({}));
}

#[tokio::test]
async fn help_and_stop_intents() {
    let runtime = SkillRuntime::with_service(StubService::new(Ok("unused".into())));
    let intent = |name: &str| json!({ "request": { "type": "IntentRequest", "intent": { "name": name } } });

    let help = invoke(&runtime, intent("AMAZON.HelpIntent")).await;
    assert_eq!(
        help["response"]["outputSpeech"]["ssml"],
        "<speak>You can ask me to translate something!</speak>"
    );
    assert_eq!(help["response"]["shouldEndSession"], false);

    let stop = invoke(&runtime, intent("AMAZON.StopIntent")).await;
    assert_eq!(stop["response"]["outputSpeech"]["ssml"], "<speak>Goodbye, Serverless Guru!</speak>");
    assert_eq!(stop["response"]["shouldEndSession"], true);
    assert!(stop["response"].get("reprompt").is_none());
}

#[tokio::test]
async fn unhandled_requests_never_fail() {
    let runtime = SkillRuntime::with_service(StubService::new(Ok("unused".into())));

    let unknown_type = json!({ "request": { "type": "CanFulfillIntentRequest", "requestId": "x" } });
    let unknown_intent = json!({ "request": { "type": "IntentRequest", "intent": { "name": "AMAZON.FallbackIntent" } } });

    for event in [unknown_type, unknown_intent, json!("garbage")] {
        let response = invoke(&runtime, event).await;
        assert_eq!(response["response"]["outputSpeech"]["ssml"], APOLOGY_SSML);
    }
}
