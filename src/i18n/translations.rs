//! Translation data
//!
//! The UI strings of the site, one `(key, text)` slice per locale. Keys are
//! namespaced by where the text appears (`<page>.<section>.<element>`) and
//! every locale must define exactly the same set of keys.

/// Locale used when a caller does not configure one.
pub const DEFAULT_LOCALE: &str = "en";

/// `(key, text)` pairs for a single locale.
pub type Entries = &'static [(&'static str, &'static str)];

const KO: Entries = &[
    ("nav.home", "Home"),
    ("nav.blog", "Blog"),
    ("nav.notes", "Notes"),
    ("nav.bookmarks", "Bookmarks"),
    ("home.section.blog.title", "블로그"),
    ("home.section.blog.viewAll", "전체 보기 →"),
    ("home.section.projects.title", "프로젝트"),
    ("home.section.projects.viewAll", "전체 보기 →"),
    ("home.section.experience.title", "경력"),
    ("home.section.experience.viewAll", "전체 보기 →"),
    ("home.experience.present", "현재"),
    ("blog.title", "블로그"),
    ("blog.description", "최근 블로그 포스트를 읽어보세요"),
    ("blog.empty", "이 카테고리에 아직 포스트가 없습니다."),
    ("notes.title", "노트"),
    ("notes.description", "짧은 생각과 배움을 기록합니다"),
    ("bookmarks.title", "북마크"),
    ("bookmarks.description", "흥미로운 읽을거리와 자료 모음"),
    ("bookmarks.byPrefix", "by "),
    ("categories.all", "All"),
];

const EN: Entries = &[
    ("nav.home", "Home"),
    ("nav.blog", "Blog"),
    ("nav.notes", "Notes"),
    ("nav.bookmarks", "Bookmarks"),
    ("home.section.blog.title", "Blog"),
    ("home.section.blog.viewAll", "View All →"),
    ("home.section.projects.title", "Projects"),
    ("home.section.projects.viewAll", "View All →"),
    ("home.section.experience.title", "Experience"),
    ("home.section.experience.viewAll", "View All →"),
    ("home.experience.present", "Present"),
    ("blog.title", "Blog"),
    ("blog.description", "Read my latest blog posts"),
    ("blog.empty", "No posts in this category yet."),
    ("notes.title", "Notes"),
    ("notes.description", "Short-form thoughts and learnings"),
    ("bookmarks.title", "Bookmarks"),
    ("bookmarks.description", "My collection of interesting reads and resources"),
    ("bookmarks.byPrefix", "by "),
    ("categories.all", "All"),
];

/// All locales and their entries.
pub const TRANSLATIONS: &[(&str, Entries)] = &[("ko", KO), ("en", EN)];
