// ==========================================
// 教師員額控管系統 - 课程解析端到端测试
// ==========================================
// 覆盖: 试算表（CSV 网格）→ 课程目录 → 落盘；PDF 行判定 → 解析结果
// ==========================================

use std::io::Write;
use std::sync::Arc;

use tempfile::{tempdir, Builder};
use teacher_quota::config::{DepartmentConfig, PeriodColumn, SheetLayout};
use teacher_quota::importer::{
    CsvGridLoader, Grid, ImportResult, PdfCourseExtractor, PdfRowClassifier, PdfTableSource,
    RawTable, SheetCourseExtractor,
};
use teacher_quota::repository::{DocumentStore, JsonFileStore, COURSES_KEY};
use teacher_quota::{CourseApi, CourseCatalogDocument, DomainLabel};

// ==========================================
// 辅助函数
// ==========================================
fn two_period_layout() -> SheetLayout {
    SheetLayout {
        sheet_index: 0,
        data_start_row: 1,
        section_column: 0,
        name_column: 1,
        school_year: 113,
        departments: vec![DepartmentConfig {
            id: "data_processing".to_string(),
            name: "資處科".to_string(),
            class_count: 2,
            columns: vec![
                PeriodColumn { period: "1-1".to_string(), column: 2 },
                PeriodColumn { period: "1-2".to_string(), column: 3 },
            ],
        }],
    }
}

struct InMemoryPdf {
    pages: Vec<Vec<RawTable>>,
}

impl PdfTableSource for InMemoryPdf {
    fn page_count(&self) -> ImportResult<usize> {
        Ok(self.pages.len())
    }

    fn extract_tables(&self, page_index: usize) -> ImportResult<Vec<RawTable>> {
        Ok(self.pages[page_index].clone())
    }
}

fn raw_row(cells: &[&str]) -> Vec<Option<String>> {
    cells.iter().map(|c| Some(c.to_string())).collect()
}

// ==========================================
// 试算表
// ==========================================
#[test]
fn test_single_row_grid_yields_chinese_social_course() {
    teacher_quota::logging::init_test();

    let grid = Grid::from_strings(&[vec!["", "", "", ""], vec!["國文", "國語文", "2", "2"]]);
    let extractor = SheetCourseExtractor::new(two_period_layout());

    let departments = extractor.extract(&grid);
    let courses = &departments[0].courses;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].domain, DomainLabel::ChineseSocial);
    assert_eq!(courses[0].total_hours, 4);

    let json = serde_json::to_value(&courses[0]).unwrap();
    assert_eq!(json["domain"], "國文/社會");
    assert_eq!(json["per_period_hours"]["1-1"], 2);
}

#[test]
fn test_lookup_wins_under_contradicting_header() {
    let grid = Grid::from_strings(&[
        vec!["", "", "", ""],
        vec!["英文", "歷史", "2", "0"],
        vec!["", "英文閱讀", "2", "2"],
    ]);
    let extractor = SheetCourseExtractor::new(two_period_layout());
    let courses = &extractor.extract(&grid)[0].courses;

    assert_eq!(courses[0].domain, DomainLabel::ChineseSocial);
    assert_eq!(courses[1].domain, DomainLabel::English);
}

#[test]
fn test_extraction_is_idempotent() {
    let grid = Grid::from_strings(&[
        vec!["", "", "", ""],
        vec!["資處", "程式設計", "3", "3"],
        vec!["", "小計", "3", "3"],
    ]);
    let extractor = SheetCourseExtractor::new(two_period_layout());

    assert_eq!(extractor.extract(&grid), extractor.extract(&grid));
}

#[test]
fn test_csv_import_replaces_catalog() {
    let dir = tempdir().unwrap();
    let store = Arc::new(JsonFileStore::new(dir.path()));

    // 先放一份旧目录，导入后应整批替换
    let mut old = CourseCatalogDocument::new(112, Vec::new());
    old.departments.push(teacher_quota::DepartmentSchedule {
        id: "old".to_string(),
        name: "舊科".to_string(),
        class_count: 1,
        courses: Vec::new(),
    });
    store.save(COURSES_KEY, &old).unwrap();

    let mut csv_file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(csv_file, "領域,科目,一上,一下").unwrap();
    writeln!(csv_file, "國文,國語文,4,4").unwrap();
    writeln!(csv_file, ",英語文,2,2").unwrap();
    writeln!(csv_file, ",總節數,6,6").unwrap();
    writeln!(csv_file, "資處,程式設計,,3").unwrap();
    writeln!(csv_file, ",會計實務,0,0").unwrap();

    let api = CourseApi::new(store.clone());
    let response = api
        .import_spreadsheet(csv_file.path(), Some(two_period_layout()))
        .unwrap();

    assert_eq!(response.course_count, 3);
    assert_eq!(response.departments.len(), 1);

    let catalog: CourseCatalogDocument = store.load(COURSES_KEY).unwrap();
    assert_eq!(catalog.school_year, 113);
    assert!(catalog.last_updated.is_some());
    assert_eq!(catalog.departments.len(), 1);
    assert_eq!(catalog.departments[0].id, "data_processing");

    let courses = &catalog.departments[0].courses;
    assert_eq!(courses[2].name, "程式設計");
    assert_eq!(courses[2].domain, DomainLabel::Informatics);
    assert_eq!(courses[2].total_hours, 3);
    for course in courses {
        assert_eq!(course.total_hours, course.per_period_hours.values().sum::<u32>());
    }

    // 统计以落盘目录重算，与导入响应一致
    let stats = api.get_catalog_stats().unwrap();
    assert_eq!(stats, response.departments);
    assert_eq!(stats[0].total_hours, 15);
    assert_eq!(stats[0].unclassified_count, 0);
}

#[test]
fn test_csv_loader_matches_in_memory_grid() {
    use teacher_quota::importer::GridLoader;

    let mut csv_file = Builder::new().suffix(".csv").tempfile().unwrap();
    writeln!(csv_file, ",,,").unwrap();
    writeln!(csv_file, "國文,國語文,2,2").unwrap();

    let grid = CsvGridLoader.load_grid(csv_file.path(), 0).unwrap();
    let extractor = SheetCourseExtractor::new(two_period_layout());
    let courses = &extractor.extract(&grid)[0].courses;

    assert_eq!(courses.len(), 1);
    assert_eq!(courses[0].total_hours, 4);
}

// ==========================================
// PDF
// ==========================================
#[test]
fn test_total_hours_pdf_row_rejected() {
    let classifier = PdfRowClassifier::default();
    assert!(classifier.classify_row(&raw_row(&["總節數", "12", "14"])).is_none());
}

#[test]
fn test_pdf_rows_without_qualifying_numbers_never_emitted() {
    let classifier = PdfRowClassifier::default();
    let rows = [
        raw_row(&["專題實作", "25", "100"]),
        raw_row(&["專題實作", "備註"]),
        raw_row(&["專題實作"]),
    ];
    for row in &rows {
        assert!(classifier.classify_row(row).is_none());
    }
}

#[test]
fn test_pdf_extraction_end_to_end() {
    let source = InMemoryPdf {
        pages: vec![
            vec![vec![
                raw_row(&["課程類別", "科目名稱", "一上", "一下"]),
                raw_row(&["國語文", "4", "4"]),
                vec![None, Some("數學".to_string()), Some("4".to_string()), None],
                raw_row(&["小計", "8", "4"]),
            ]],
            vec![vec![raw_row(&["總節數", "12", "14"])]],
        ],
    };

    let result = PdfCourseExtractor::default().extract(&source);

    assert!(result.success);
    assert_eq!(result.pages_count, 2);
    assert_eq!(result.tables_found, 2);
    assert_eq!(result.raw_tables.len(), 2);
    assert_eq!(result.raw_tables[0].row_count, 4);
    assert_eq!(result.raw_tables[1].page_number, 2);

    let names: Vec<&str> = result.courses.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["國語文", "數學"]);
    for course in &result.courses {
        assert_eq!(course.total_hours, course.per_period_hours.iter().sum::<u32>());
        assert!(course.domain.is_none());
    }

    let json = serde_json::to_value(&result).unwrap();
    assert_eq!(json["success"], true);
    assert!(json["error"].is_null());
}
