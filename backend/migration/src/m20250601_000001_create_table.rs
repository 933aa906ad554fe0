use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[derive(DeriveIden)]
enum Device {
    Table,
    Id,
    DeviceId,
    SerialNo,
    DeviceName,
    DeviceBrand,
    DeviceModel,
    Cpu,
    Memory,
    Harddisk,
    Monitor,
    DeviceIp,
    Mac,
    HardwareOther,
    DeviceStatus,
    DeviceTypeId,
    DepartmentId,
    Vender,
    DevicePrice,
    DateUse,
    DateExpire,
    Warranty,
    Software,
    SoftwareSn,
}

#[derive(DeriveIden)]
enum Job {
    Table,
    Id,
    DeviceId,
    JobStatus,
    JobDetail,
    CreatedAt,
}

#[derive(DeriveIden)]
enum SoftwareType {
    Table,
    Id,
    SoftwareType,
}

#[derive(DeriveIden)]
enum SoftwareDetail {
    Table,
    Id,
    SoftwareDetail,
    SoftwareTypeId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Device::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Device::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Device::DeviceId).string().null())
                    .col(ColumnDef::new(Device::SerialNo).string().null())
                    .col(ColumnDef::new(Device::DeviceName).string().null())
                    .col(ColumnDef::new(Device::DeviceBrand).string().null())
                    .col(ColumnDef::new(Device::DeviceModel).string().null())
                    .col(ColumnDef::new(Device::Cpu).string().null())
                    .col(ColumnDef::new(Device::Memory).string().null())
                    .col(ColumnDef::new(Device::Harddisk).string().null())
                    .col(ColumnDef::new(Device::Monitor).string().null())
                    .col(ColumnDef::new(Device::DeviceIp).string().null())
                    .col(ColumnDef::new(Device::Mac).string().null())
                    .col(ColumnDef::new(Device::HardwareOther).text().null())
                    .col(ColumnDef::new(Device::DeviceStatus).string().null())
                    .col(ColumnDef::new(Device::DeviceTypeId).integer().null())
                    .col(ColumnDef::new(Device::DepartmentId).integer().null())
                    .col(ColumnDef::new(Device::Vender).string().null())
                    .col(ColumnDef::new(Device::DevicePrice).double().null())
                    .col(ColumnDef::new(Device::DateUse).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Device::DateExpire).timestamp_with_time_zone().null())
                    .col(ColumnDef::new(Device::Warranty).text().null())
                    .col(ColumnDef::new(Device::Software).text().null())
                    .col(ColumnDef::new(Device::SoftwareSn).text().null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Job::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Job::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Job::DeviceId).integer().not_null())
                    .col(ColumnDef::new(Job::JobStatus).string().not_null())
                    .col(ColumnDef::new(Job::JobDetail).text().null())
                    .col(
                        ColumnDef::new(Job::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-job-device_id")
                            .from(Job::Table, Job::DeviceId)
                            .to(Device::Table, Device::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SoftwareType::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SoftwareType::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SoftwareType::SoftwareType).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SoftwareDetail::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SoftwareDetail::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SoftwareDetail::SoftwareDetail).string().not_null())
                    .col(ColumnDef::new(SoftwareDetail::SoftwareTypeId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-software_detail-software_type_id")
                            .from(SoftwareDetail::Table, SoftwareDetail::SoftwareTypeId)
                            .to(SoftwareType::Table, SoftwareType::Id),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(SoftwareDetail::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SoftwareType::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Job::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Device::Table).to_owned())
            .await?;

        Ok(())
    }
}
