/*!
 * Integration tests for the line-processing pipeline
 */

use std::fs;
use std::sync::Arc;
use std::time::Duration;
use anyhow::Result;
use tokio::time::Instant;

use yalt::Controller;
use yalt::providers::mock::MockProvider;
use crate::common;
use crate::common::mock_providers::CountingProvider;

/// A single entry is translated and rewritten in single quotes
#[tokio::test(start_paused = true)]
async fn test_translate_language_withSingleEntry_shouldWriteTranslatedLine() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "pt-br.yml", "titulo: 'Olá Mundo'")?;
    let provider = MockProvider::working().with_translation("Olá Mundo", "Hello World");
    let controller = Controller::with_provider(common::test_config(temp_dir.path(), input), Arc::new(provider))?;

    let summary = controller.translate_language("en").await?;

    assert_eq!(summary.output_path, temp_dir.path().join("out").join("en.yml"));
    assert_eq!(fs::read_to_string(&summary.output_path)?, "  titulo: 'Hello World'");
    assert_eq!(summary.lines, 1);
    assert_eq!(summary.translated, 1);
    
    Ok(())
}

/// Passthrough lines keep their relative position around entries
#[tokio::test(start_paused = true)]
async fn test_translate_language_withPassthroughLines_shouldKeepLineCountAndOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "pt-br.yml", "# cabeçalho\n  saudacao: Oi\n---")?;
    let provider = MockProvider::working().with_translation("Oi", "Hola");
    let controller = Controller::with_provider(common::test_config(temp_dir.path(), input), Arc::new(provider))?;

    let summary = controller.translate_language("es").await?;

    let lines = common::read_lines(&summary.output_path)?;
    assert_eq!(lines, vec!["# cabeçalho", "  saudacao: 'Hola'", "---"]);
    
    Ok(())
}

/// Every line kind of the sample resource is handled
#[tokio::test(start_paused = true)]
async fn test_translate_language_withSampleResource_shouldHandleEveryLineKind() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_resource(temp_dir.path())?;
    let provider = MockProvider::working();
    let controller = Controller::with_provider(common::test_config(temp_dir.path(), input), Arc::new(provider.clone()))?;

    let summary = controller.translate_language("en").await?;

    let lines = common::read_lines(&summary.output_path)?;
    assert_eq!(lines, vec![
        "  pt-br: ''",
        "  # Página inicial",
        "  titulo: '[en] Olá Mundo'",
        "  subtitulo: '[en] Bem-vindo'",
        "  vazio: ''",
        "  horario: '[en] Abre às 10:30'",
    ]);

    let requests = provider.requests();
    assert_eq!(requests.len(), 3);
    assert!(requests.iter().all(|r| r.source_language == "pt" && r.target_language == "en"));
    assert_eq!(requests[0].text, "Olá Mundo");
    
    Ok(())
}

/// Translations containing line breaks stay on one output line
#[tokio::test(start_paused = true)]
async fn test_translate_language_withMultilineTranslation_shouldFlattenIt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "pt-br.yml", "texto: 'linha'\nfim")?;
    let provider = MockProvider::working().with_translation("linha", "first\nsecond");
    let controller = Controller::with_provider(common::test_config(temp_dir.path(), input), Arc::new(provider))?;

    let summary = controller.translate_language("en").await?;

    assert_eq!(fs::read_to_string(&summary.output_path)?, "  texto: 'first second'\nfim");
    
    Ok(())
}

/// An empty translation is accepted on the first attempt
#[tokio::test(start_paused = true)]
async fn test_translate_language_withEmptyTranslation_shouldNotRetry() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "pt-br.yml", "marcador: '-'")?;
    let provider = MockProvider::working().with_translation("-", "");
    let controller = Controller::with_provider(common::test_config(temp_dir.path(), input), Arc::new(provider.clone()))?;

    let summary = controller.translate_language("en").await?;

    assert_eq!(fs::read_to_string(&summary.output_path)?, "  marcador: ''");
    assert_eq!(provider.request_count(), 1);
    assert!(!temp_dir.path().join("logs").join("erro-traducao-en.log").exists());
    
    Ok(())
}

/// Output order follows source order even when later entries finish first
#[tokio::test(start_paused = true)]
async fn test_translate_language_withReversedCompletion_shouldKeepSourceOrder() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(
        temp_dir.path(),
        "pt-br.yml",
        "a: um\nb: dois\nseparador\nc: tres\nd: quatro\ne: cinco\nf: seis",
    )?;
    let provider = MockProvider::working()
        .with_delay("um", 60)
        .with_delay("dois", 45)
        .with_delay("tres", 30)
        .with_delay("quatro", 15);
    let controller = Controller::with_provider(common::test_config(temp_dir.path(), input), Arc::new(provider.clone()))?;

    let summary = controller.translate_language("en").await?;

    let completions = provider.completions();
    assert_eq!(&completions[..5], &["cinco", "quatro", "tres", "dois", "um"]);
    assert_eq!(common::read_lines(&summary.output_path)?, vec![
        "  a: '[en] um'",
        "  b: '[en] dois'",
        "separador",
        "  c: '[en] tres'",
        "  d: '[en] quatro'",
        "  e: '[en] cinco'",
        "  f: '[en] seis'",
    ]);
    assert_eq!(summary.translated, 6);
    
    Ok(())
}

/// An entry whose translation always fails keeps its source value
#[tokio::test(start_paused = true)]
async fn test_translate_language_withFailingProvider_shouldFallBackAndLogEveryAttempt() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let input = common::create_test_file(temp_dir.path(), "pt-br.yml", "comentario\n  titulo: \"Olá Mundo\"")?;
    let provider = MockProvider::failing();
    let controller = Controller::with_provider(common::test_config(temp_dir.path(), input), Arc::new(provider.clone()))?;

    let summary = controller.translate_language("en").await?;

    assert_eq!(fs::read_to_string(&summary.output_path)?, "comentario\n  titulo: 'Olá Mundo'");
    assert_eq!(provider.request_count(), 5);

    let log = fs::read_to_string(temp_dir.path().join("logs").join("erro-traducao-en.log"))?;
    let records: Vec<&str> = log.lines().collect();
    assert_eq!(records.len(), 5);
    for record in records {
        assert!(record.starts_with('['));
        assert!(record.contains("] \"Olá Mundo\" - Erro: Connection error: Simulated connection failure"));
    }
    
    Ok(())
}

/// Many entries are split into several batches and all get resolved
#[tokio::test(start_paused = true)]
async fn test_translate_language_withSeveralBatches_shouldResolveEveryEntry() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content: Vec<String> = (1..=12).map(|i| format!("chave{}: 'valor {}'", i, i)).collect();
    let input = common::create_test_file(temp_dir.path(), "pt-br.yml", &content.join("\n"))?;
    let provider = MockProvider::intermittent(4);
    let controller = Controller::with_provider(common::test_config(temp_dir.path(), input), Arc::new(provider.clone()))?;

    let summary = controller.translate_language("fr").await?;

    let lines = common::read_lines(&summary.output_path)?;
    assert_eq!(lines.len(), 12);
    for (i, line) in lines.iter().enumerate() {
        assert_eq!(line, &format!("  chave{}: '[fr] valor {}'", i + 1, i + 1));
    }
    assert_eq!(summary.translated, 12);
    // Every fourth call failed once and was retried
    assert!(provider.request_count() > 12);
    
    Ok(())
}

/// Full batches are paced, the final partial batch is not, and batches never overlap
#[tokio::test(start_paused = true)]
async fn test_translate_language_withTwelveEntries_shouldPaceFullBatchesOnly() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let content: Vec<String> = (1..=12).map(|i| format!("chave{}: valor {}", i, i)).collect();
    let input = common::create_test_file(temp_dir.path(), "pt-br.yml", &content.join("\n"))?;
    let config = common::test_config(temp_dir.path(), input);
    assert_eq!(config.pipeline.batch_delay_ms, 2000);
    let provider = CountingProvider::new(10);
    let controller = Controller::with_provider(config, Arc::new(provider.clone()))?;

    let start = Instant::now();
    let summary = controller.translate_language("en").await?;
    let elapsed = start.elapsed();

    // Two paced batches of 5, then an unpaced drain of 2
    assert!(elapsed >= Duration::from_millis(4000), "elapsed {:?}", elapsed);
    assert!(elapsed < Duration::from_millis(4100), "elapsed {:?}", elapsed);
    assert_eq!(summary.translated, 12);
    assert_eq!(provider.calls(), 12);
    assert_eq!(provider.peak(), 5);

    let lines = common::read_lines(&summary.output_path)?;
    assert_eq!(lines.len(), 12);
    assert_eq!(lines[11], "  chave12: 'valor 12 (en)'");
    
    Ok(())
}

/// A lone failing entry after many passthrough lines is drained without pacing
#[tokio::test(start_paused = true)]
async fn test_translate_language_withFailingEntryAfterCheckpoints_shouldFallBackInPlace() -> Result<()> {
    let temp_dir = common::create_temp_dir()?;
    let mut content: Vec<String> = (1..=1000).map(|i| format!("linha {}", i)).collect();
    content.push("x: y".to_string());
    let input = common::create_test_file(temp_dir.path(), "pt-br.yml", &content.join("\n"))?;
    let provider = MockProvider::failing();
    let controller = Controller::with_provider(common::test_config(temp_dir.path(), input), Arc::new(provider.clone()))?;

    let start = Instant::now();
    let summary = controller.translate_language("en").await?;

    assert!(start.elapsed() < Duration::from_millis(2000));
    assert_eq!(provider.request_count(), 5);
    let lines = common::read_lines(&summary.output_path)?;
    assert_eq!(lines.len(), 1001);
    assert_eq!(lines[999], "linha 1000");
    assert_eq!(lines[1000], "  x: 'y'");
    
    Ok(())
}
