// ==========================================
// 教師員額控管系統 - 命令行入口
// ==========================================
// 用法:
//   teacher-quota import-excel <file> [layout.json]
//   teacher-quota import-pdf <file.pdf>
//   teacher-quota summary
//   teacher-quota stats
//   teacher-quota update-domain <domain_id> <update.json>
//   teacher-quota settings
//
// 资料目录: TEACHER_QUOTA_DATA_DIR 或用户数据目录
// ==========================================

use std::error::Error;
use std::path::Path;

use teacher_quota::app::{get_default_data_dir, AppState};
use teacher_quota::config::SheetLayout;
use teacher_quota::engine::DepartmentStats;
use teacher_quota::importer::PdfExtractionResult;

const USAGE: &str = "用法:
  teacher-quota import-excel <file> [layout.json]
  teacher-quota import-pdf <file.pdf>
  teacher-quota summary
  teacher-quota stats
  teacher-quota update-domain <domain_id> <update.json>
  teacher-quota settings";

fn main() -> Result<(), Box<dyn Error>> {
    teacher_quota::logging::init();

    let mut args = std::env::args().skip(1);
    let command = args.next().unwrap_or_default();

    let data_dir = get_default_data_dir();
    tracing::info!("{} v{}", teacher_quota::APP_NAME, teacher_quota::VERSION);
    let state = AppState::new(&data_dir);

    match command.as_str() {
        "import-excel" => {
            let file = args.next().ok_or(USAGE)?;
            let layout = match args.next() {
                Some(layout_path) => Some(SheetLayout::from_json_file(layout_path)?),
                None => None,
            };

            let response = state.course_api.import_spreadsheet(&file, layout)?;
            println!("课程资料已储存到 {}", data_dir.join("courses.json").display());
            print_department_stats(&response.departments);
        }
        "import-pdf" => {
            let file = args.next().ok_or(USAGE)?;
            let result = state.course_api.parse_curriculum_pdf(Path::new(&file));
            print_pdf_result(&file, &result);
            if !result.success {
                std::process::exit(1);
            }
        }
        "summary" => {
            let report = state.staffing_api.get_summary()?;
            println!("{}", serde_json::to_string_pretty(&report)?);

            let shortages: Vec<String> = report
                .shortage_domains()
                .map(|d| format!("{}(缺 {} 节)", d.name, d.difference))
                .collect();
            if !shortages.is_empty() {
                eprintln!("缺额领域: {}", shortages.join("、"));
            }
        }
        "stats" => {
            let departments = state.course_api.get_catalog_stats()?;
            print_department_stats(&departments);
        }
        "update-domain" => {
            let domain_id = args.next().ok_or(USAGE)?;
            let payload_path = args.next().ok_or(USAGE)?;
            let payload: serde_json::Value =
                serde_json::from_str(&std::fs::read_to_string(payload_path)?)?;

            let response = state.staffing_api.update_domain_json(&domain_id, payload)?;
            println!("{}", serde_json::to_string_pretty(&response)?);
            if !response.success {
                std::process::exit(1);
            }
        }
        "settings" => {
            let settings = state.settings_api.get_public_settings()?;
            println!("{}", serde_json::to_string_pretty(&settings)?);
        }
        _ => {
            eprintln!("{}", USAGE);
            std::process::exit(2);
        }
    }

    Ok(())
}

fn print_department_stats(departments: &[DepartmentStats]) {
    println!("共 {} 个科别", departments.len());
    for dept in departments {
        println!(
            "  - {}: {} 门课程，共 {} 节",
            dept.name, dept.course_count, dept.total_hours
        );
        for dc in &dept.domain_counts {
            println!("      {}: {} 门", dc.domain, dc.count);
        }
        if dept.unclassified_count > 0 {
            println!("      （{} 门待判定领域）", dept.unclassified_count);
        }
    }
}

fn print_pdf_result(file: &str, result: &PdfExtractionResult) {
    println!("解析 PDF: {}", file);
    println!("{}", "-".repeat(50));
    println!("页数: {}", result.pages_count);
    println!("找到表格数: {}", result.tables_found);
    println!("解析到的课程数: {}", result.courses.len());

    if !result.courses.is_empty() {
        println!();
        println!("课程列表（前 20 笔）:");
        for course in result.courses.iter().take(20) {
            let hours: Vec<String> = course.per_period_hours.iter().map(|h| h.to_string()).collect();
            println!("  {}: 总{}节 [{}]", course.name, course.total_hours, hours.join(" "));
        }
    }

    if let Some(error) = &result.error {
        println!();
        println!("错误: {}", error);
    }
}
