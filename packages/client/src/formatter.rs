//! Message formatting utilities for client display.

use chathub_server::infrastructure::dto::{
    payload::{CommentDto, JobDto, JobStatusDto, WorkerDto},
    websocket::ServerMessage,
};

use crate::view::Partition;

const RULE: &str = "============================================================";

/// Message formatter for client display
pub struct MessageFormatter;

impl MessageFormatter {
    /// Format one pushed event
    pub fn format_event(message: &ServerMessage) -> String {
        match message {
            ServerMessage::NewComment(comment) => {
                format!("\n{}\n", Self::format_comment(comment))
            }
            ServerMessage::NewJob(job) => format!("\n+ job {}\n", Self::format_job(job)),
            ServerMessage::ClearComments => "\n* dashboard cleared\n".to_string(),
            ServerMessage::WorkerUpdate(workers) => {
                format!("\n* {} worker(s) online\n", workers.len())
            }
            ServerMessage::InitialJobs(jobs) => format!("\n* {} job(s) known\n", jobs.len()),
        }
    }

    pub fn format_comment(comment: &CommentDto) -> String {
        format!(
            "@{}: {}  [{} via {}]",
            comment.user_name, comment.text, comment.timestamp, comment.worker_id
        )
    }

    pub fn format_job(job: &JobDto) -> String {
        let status = match job.status {
            JobStatusDto::Pending => "pending",
            JobStatusDto::InProgress => "in_progress",
            JobStatusDto::Done => "done",
            JobStatusDto::Failed => "failed",
        };
        format!("{} ({}) {}", job.id, status, job.url)
    }

    /// Format a job listing
    pub fn format_jobs(title: &str, jobs: &[JobDto]) -> String {
        let mut output = format!("\n{}\n{} ({}):\n", RULE, title, jobs.len());
        if jobs.is_empty() {
            output.push_str("(No jobs)\n");
        }
        for job in jobs {
            output.push_str(&format!("{}\n", Self::format_job(job)));
        }
        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format the worker list, marking this session's own worker record
    /// by name.
    pub fn format_workers(workers: &[WorkerDto], me: Option<&str>) -> String {
        let mut output = format!("\n{}\nWorkers online ({}):\n", RULE, workers.len());
        if workers.is_empty() {
            output.push_str("(No workers)\n");
        }
        for worker in workers {
            let me_suffix = if Some(worker.name.as_str()) == me {
                " (me)"
            } else {
                ""
            };
            output.push_str(&format!(
                "{}{} - online since {}\n",
                worker.name, me_suffix, worker.connected_at
            ));
        }
        output.push_str(RULE);
        output.push('\n');
        output
    }

    /// Format the unique-user / number-priority view
    pub fn format_view(view: &Partition<'_>) -> String {
        let mut output = format!("\n{}\n", RULE);
        for (title, list) in [
            ("Unique comments", &view.general),
            ("Number priority", &view.priority),
        ] {
            output.push_str(&format!("{} ({}):\n", title, list.len()));
            if list.is_empty() {
                output.push_str("(No comments)\n");
            }
            for comment in list.iter() {
                output.push_str(&format!("  {}\n", Self::format_comment(comment)));
            }
        }
        output.push_str(RULE);
        output.push('\n');
        output
    }

    pub fn format_help() -> String {
        [
            "",
            "<user>: <text>  submit a comment",
            "/job <url>      queue a scrape job",
            "/jobs           list pending jobs",
            "/clear          clear all comments",
            "/view           unique / number-priority comment view",
            "/workers        list online workers",
            "/help           show this help",
            "Ctrl+C / Ctrl+D exits",
            "",
        ]
        .join("\n")
    }

    /// Format a raw text frame (when parsing fails)
    pub fn format_raw_message(text: &str) -> String {
        format!("\n← Received: {}\n", text)
    }
}

#[cfg(test)]
mod tests {
    use chathub_server::infrastructure::dto::payload::WorkerStatusDto;

    use super::*;
    use crate::view::partition;

    fn comment(id: &str, user_name: &str, text: &str) -> CommentDto {
        CommentDto {
            id: id.to_string(),
            user_name: user_name.to_string(),
            text: text.to_string(),
            worker_id: "w1".to_string(),
            timestamp: "2025-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn test_format_new_comment_event() {
        // テスト項目: new_comment イベントがユーザー名・本文・時刻付きで表示される
        // given (前提条件):
        let message = ServerMessage::NewComment(comment("1", "alice", "hello"));

        // when (操作):
        let result = MessageFormatter::format_event(&message);

        // then (期待する結果):
        assert!(result.contains("@alice: hello"));
        assert!(result.contains("2025-01-01T00:00:00.000Z"));
        assert!(result.contains("via w1"));
    }

    #[test]
    fn test_format_jobs_empty() {
        // テスト項目: ジョブが無い場合の表示
        // given (前提条件):
        let jobs = vec![];

        // when (操作):
        let result = MessageFormatter::format_jobs("Pending jobs", &jobs);

        // then (期待する結果):
        assert!(result.contains("Pending jobs (0):"));
        assert!(result.contains("(No jobs)"));
    }

    #[test]
    fn test_format_workers_marks_me() {
        // テスト項目: 自分と同名のワーカーに (me) が付く
        // given (前提条件):
        let workers = vec![
            WorkerDto {
                id: "c1".to_string(),
                name: "scraper-1".to_string(),
                status: WorkerStatusDto::Online,
                connected_at: "2025-01-01T00:00:00.000Z".to_string(),
            },
            WorkerDto {
                id: "c2".to_string(),
                name: "scraper-2".to_string(),
                status: WorkerStatusDto::Online,
                connected_at: "2025-01-01T00:00:01.000Z".to_string(),
            },
        ];

        // when (操作):
        let result = MessageFormatter::format_workers(&workers, Some("scraper-1"));

        // then (期待する結果):
        assert!(result.contains("scraper-1 (me)"));
        assert!(result.contains("scraper-2 - online since"));
        assert!(!result.contains("scraper-2 (me)"));
    }

    #[test]
    fn test_format_view_sections() {
        // テスト項目: 表示用パーティションの両セクションが出力される
        // given (前提条件):
        let comments = vec![comment("1", "alice", "hello"), comment("2", "bob", "no 7")];
        let view = partition(&comments);

        // when (操作):
        let result = MessageFormatter::format_view(&view);

        // then (期待する結果):
        assert!(result.contains("Unique comments (1):"));
        assert!(result.contains("Number priority (1):"));
        assert!(result.contains("@bob: no 7"));
    }

    #[test]
    fn test_format_help_lists_commands() {
        // テスト項目: ヘルプに全コマンドが含まれる
        let help = MessageFormatter::format_help();
        for command in ["/job", "/jobs", "/clear", "/view", "/workers", "/help"] {
            assert!(help.contains(command));
        }
    }
}
