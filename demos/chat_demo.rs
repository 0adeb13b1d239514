//! Terminal chat demo.
//!
//! Keeps the transcript client-side and sends the full history on every
//! turn, which is the whole consumer contract: append the user message,
//! call `chat`, append the assistant reply, surface any error and keep
//! going.
//!
//! ```bash
//! DEEPSEEK_API_KEY=sk-... cargo run --example chat_demo
//! ```

use std::io::{self, BufRead, Write};

use deepseek_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let api_key = std::env::var("DEEPSEEK_API_KEY")
        .map_err(|_| "set DEEPSEEK_API_KEY to run this demo")?;
    let client = DeepSeekClient::new(DeepSeekConfig::new(api_key));

    let mut messages: Vec<ChatMessage> = Vec::new();
    let stdin = io::stdin();

    println!("DeepSeek chat — empty line to quit");
    loop {
        print!("you> ");
        io::stdout().flush()?;

        let mut line = String::new();
        stdin.lock().read_line(&mut line)?;
        let input = line.trim();
        if input.is_empty() {
            break;
        }

        messages.push(ChatMessage::user(input));

        let request = ChatCompletionRequest::new(messages.clone())
            .with_temperature(0.7)
            .with_max_tokens(1000);

        match client.chat(request).await {
            Ok(response) => match response.choices.into_iter().next() {
                Some(choice) => {
                    println!("assistant> {}", choice.message.content);
                    messages.push(choice.message);
                }
                None => println!("assistant> (no reply)"),
            },
            Err(e) => println!("error> {e}"),
        }
    }

    Ok(())
}
