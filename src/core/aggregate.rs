// src/core/aggregate.rs
use std::collections::HashMap;
use std::collections::HashSet;

use crate::core::classify::{expected_dir, is_misplaced};
use crate::core::refs::{is_orphan, ReferenceSet};
use crate::core::scanner::Workspace;
use crate::models::report::{
    AttachmentReport, CategoryBucket, DocumentSummary, FolderBucket, GoalBucket, LinkSummary,
    MisplacedEntry, OrphanEntry, OrphanReport, ProjectBucket, StatsReport, TagBucket, TagCount,
    TaskSummary, Totals, WordReport,
};
use crate::models::{Category, Document};
use crate::utils::relative_to;

/// Writing goal thresholds, ascending.
pub const WRITING_GOALS: [(&str, usize); 4] = [
    ("Short note", 500),
    ("Article", 1000),
    ("Long read", 2000),
    ("Deep dive", 5000),
];

#[must_use]
pub fn totals(documents: &[Document]) -> Totals {
    let files = documents.len();
    let mut words: u64 = 0;
    let mut size: u64 = 0;
    for doc in documents {
        words = words.saturating_add(u64::try_from(doc.words).unwrap_or(u64::MAX));
        size = size.saturating_add(doc.size);
    }
    let average_words = if files == 0 {
        0
    } else {
        (words as f64 / files as f64).round() as u64
    };
    Totals {
        files,
        words,
        average_words,
        size,
    }
}

/// Per-classification-folder rollup, sorted by folder name.
#[must_use]
pub fn by_folder(documents: &[Document]) -> Vec<FolderBucket> {
    let mut buckets: Vec<FolderBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for doc in documents {
        let Some(folder) = &doc.folder else { continue };
        let slot = *index.entry(folder.clone()).or_insert_with(|| {
            buckets.push(FolderBucket {
                folder: folder.clone(),
                files: 0,
                words: 0,
                size: 0,
            });
            buckets.len() - 1
        });
        buckets[slot].files += 1;
        buckets[slot].words = buckets[slot]
            .words
            .saturating_add(u64::try_from(doc.words).unwrap_or(u64::MAX));
        buckets[slot].size = buckets[slot].size.saturating_add(doc.size);
    }
    buckets.sort_by(|a, b| a.folder.cmp(&b.folder));
    buckets
}

/// Per-project rollup, sorted by words descending. The sort is stable, so
/// ties keep first-discovery order.
#[must_use]
pub fn by_project(documents: &[Document]) -> Vec<ProjectBucket> {
    let mut buckets: Vec<ProjectBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for doc in documents {
        let Some(project) = &doc.project else { continue };
        let slot = *index.entry(project.clone()).or_insert_with(|| {
            buckets.push(ProjectBucket {
                project: project.clone(),
                files: 0,
                words: 0,
            });
            buckets.len() - 1
        });
        buckets[slot].files += 1;
        buckets[slot].words = buckets[slot]
            .words
            .saturating_add(u64::try_from(doc.words).unwrap_or(u64::MAX));
    }
    buckets.sort_by(|a, b| b.words.cmp(&a.words));
    buckets
}

/// Per-tag word rollup, sorted by words descending, ties in
/// first-discovery order (stable sort, deliberately not alphabetical).
#[must_use]
pub fn by_tag(documents: &[Document]) -> Vec<TagBucket> {
    let mut buckets: Vec<TagBucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for doc in documents {
        for tag in &doc.tags {
            let slot = *index.entry(tag.clone()).or_insert_with(|| {
                buckets.push(TagBucket {
                    tag: tag.clone(),
                    files: 0,
                    words: 0,
                });
                buckets.len() - 1
            });
            buckets[slot].files += 1;
            buckets[slot].words = buckets[slot]
                .words
                .saturating_add(u64::try_from(doc.words).unwrap_or(u64::MAX));
        }
    }
    buckets.sort_by(|a, b| b.words.cmp(&a.words));
    buckets
}

/// Per-tag document counts, sorted by count descending, stable ties.
#[must_use]
pub fn tag_counts(documents: &[Document]) -> Vec<TagCount> {
    let mut counts: Vec<TagCount> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();
    for doc in documents {
        for tag in &doc.tags {
            let slot = *index.entry(tag.clone()).or_insert_with(|| {
                counts.push(TagCount {
                    tag: tag.clone(),
                    count: 0,
                });
                counts.len() - 1
            });
            counts[slot].count += 1;
        }
    }
    counts.sort_by(|a, b| b.count.cmp(&a.count));
    counts
}

/// The `n` longest documents by word count.
#[must_use]
pub fn top_documents(documents: &[Document], n: usize) -> Vec<DocumentSummary> {
    let mut sorted: Vec<&Document> = documents.iter().collect();
    sorted.sort_by(|a, b| b.words.cmp(&a.words));
    sorted
        .into_iter()
        .take(n)
        .map(|doc| DocumentSummary {
            path: doc.rel_path.clone(),
            title: doc.title.clone(),
            words: doc.words,
            tags: doc.tags.clone(),
        })
        .collect()
}

/// Documents at or above each writing-goal threshold.
#[must_use]
pub fn goal_buckets(documents: &[Document]) -> Vec<GoalBucket> {
    WRITING_GOALS
        .iter()
        .map(|&(label, threshold)| GoalBucket {
            label,
            threshold,
            count: documents.iter().filter(|d| d.words >= threshold).count(),
        })
        .collect()
}

#[must_use]
pub fn link_summary(documents: &[Document]) -> LinkSummary {
    let mut targets: HashSet<&str> = HashSet::new();
    for doc in documents {
        for link in &doc.links {
            targets.insert(link);
        }
    }
    let density = if documents.is_empty() {
        0.0
    } else {
        targets.len() as f64 / documents.len() as f64
    };
    LinkSummary {
        targets: targets.len(),
        density,
    }
}

#[must_use]
pub fn task_summary(documents: &[Document]) -> TaskSummary {
    let mut summary = TaskSummary::default();
    for doc in documents {
        summary.open += doc.tasks_open;
        summary.done += doc.tasks_done;
    }
    summary
}

#[must_use]
pub fn word_report(workspace: &Workspace, top: usize) -> WordReport {
    WordReport {
        totals: totals(&workspace.documents),
        by_folder: by_folder(&workspace.documents),
        by_project: by_project(&workspace.documents),
        by_tag: by_tag(&workspace.documents),
        top_documents: top_documents(&workspace.documents, top),
        goals: goal_buckets(&workspace.documents),
        skipped: workspace.skipped.len(),
    }
}

#[must_use]
pub fn stats_report(workspace: &Workspace) -> StatsReport {
    StatsReport {
        totals: totals(&workspace.documents),
        by_folder: by_folder(&workspace.documents),
        top_tags: tag_counts(&workspace.documents),
        longest: top_documents(&workspace.documents, 5),
        links: link_summary(&workspace.documents),
        tasks: task_summary(&workspace.documents),
        skipped: workspace.skipped.len(),
    }
}

#[must_use]
pub fn orphan_report(workspace: &Workspace) -> OrphanReport {
    let refs = ReferenceSet::collect(&workspace.documents);
    let mut orphans = Vec::new();
    let mut reclaimable: u64 = 0;
    for attachment in &workspace.attachments {
        if is_orphan(attachment, &refs) {
            reclaimable = reclaimable.saturating_add(attachment.size);
            orphans.push(OrphanEntry {
                path: relative_to(&attachment.path, &workspace.root),
                name: attachment.name.clone(),
                size: attachment.size,
            });
        }
    }
    OrphanReport {
        attachments: workspace.attachments.len(),
        documents: workspace.documents.len(),
        referenced: refs.len(),
        orphans,
        reclaimable,
    }
}

#[must_use]
pub fn attachment_report(workspace: &Workspace) -> AttachmentReport {
    let attachments_root = workspace.attachments_root();
    let refs = ReferenceSet::collect(&workspace.documents);

    let mut total_size: u64 = 0;
    let mut by_category: Vec<CategoryBucket> = Category::ALL
        .into_iter()
        .map(|category| CategoryBucket {
            category,
            count: 0,
            size: 0,
        })
        .collect();
    let mut misplaced = Vec::new();
    let mut orphaned = Vec::new();

    for attachment in &workspace.attachments {
        total_size = total_size.saturating_add(attachment.size);
        if let Some(bucket) = by_category
            .iter_mut()
            .find(|b| b.category == attachment.category)
        {
            bucket.count += 1;
            bucket.size = bucket.size.saturating_add(attachment.size);
        }
        if is_misplaced(attachment, &attachments_root) {
            misplaced.push(MisplacedEntry {
                path: relative_to(&attachment.path, &workspace.root),
                category: attachment.category,
                expected: relative_to(
                    &expected_dir(attachment, &attachments_root).join(&attachment.name),
                    &workspace.root,
                ),
            });
        }
        if is_orphan(attachment, &refs) {
            orphaned.push(OrphanEntry {
                path: relative_to(&attachment.path, &workspace.root),
                name: attachment.name.clone(),
                size: attachment.size,
            });
        }
    }
    by_category.retain(|b| b.count > 0);

    AttachmentReport {
        total: workspace.attachments.len(),
        total_size,
        by_category,
        misplaced,
        orphaned,
    }
}
