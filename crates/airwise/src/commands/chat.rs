use airwise_assistant::{Assistant, Author, ChatMessage};
use tokio::io::{AsyncBufReadExt, BufReader};

fn render(message: &ChatMessage) -> String {
    let who = match message.author {
        Author::User => "tú",
        Author::Assistant => "airwise",
    };
    format!("[{}] {}: {}", message.timestamp.format("%H:%M:%S"), who, message.text)
}

/// Submit one message, wait for the reply and print it
async fn exchange(assistant: &Assistant, text: &str) -> anyhow::Result<String> {
    assistant.submit(text)?;
    assistant.wait_idle().await;

    let reply = assistant
        .messages()
        .last()
        .map(render)
        .unwrap_or_default();
    println!("{reply}");
    Ok(reply)
}

pub async fn run_ask(assistant: &Assistant, text: &str) -> anyhow::Result<()> {
    exchange(assistant, text).await?;
    Ok(())
}

pub async fn run_chat(assistant: &Assistant) -> anyhow::Result<()> {
    for message in assistant.messages() {
        println!("{}", render(&message));
    }
    println!("Escribe /refresh para actualizar los datos o /quit para salir.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match line.trim() {
            "" => continue,
            "/quit" | "/exit" => break,
            "/refresh" => {
                assistant.session().refresh();
                println!("Datos actualizados.");
                continue;
            }
            _ => {}
        }
        exchange(assistant, &line).await?;
    }
    Ok(())
}
